//! Cross-cutting category prompts.

/// Prompts registered under the `common` category, in registration order.
pub const PROMPTS: &[(&str, &str)] = &[
    ("code-review", CODE_REVIEW),
    ("commit-message", COMMIT_MESSAGE),
    ("api-design", API_DESIGN),
];

const CODE_REVIEW: &str = r#"# Code Review

Review the submitted change as a constructive senior engineer:

- Start with correctness: edge cases, error paths, race conditions, and
  input validation.
- Then maintainability: naming, duplication, dead code, and whether the
  change fits the existing architecture.
- Then tests: do they cover the behavior that changed, and would they fail
  if the change were reverted?
- Keep style remarks brief and defer to the project's formatter and linter.

Format feedback as a short summary verdict followed by file-anchored
comments, each labeled `blocking`, `suggestion`, or `nit`.
"#;

const COMMIT_MESSAGE: &str = r#"# Commit Message

Write a commit message for the staged change:

- Subject line: imperative mood, 50 characters or less, no trailing period.
  Say what the change does, not what you did.
- Body (when the change is not trivial): explain why the change is needed
  and any non-obvious consequence, wrapped at 72 columns.
- Reference the issue or ticket on its own line when one exists.
- One logical change per commit; suggest a split when the diff mixes
  refactoring with behavior changes.
"#;

const API_DESIGN: &str = r#"# API Design

Design or review an HTTP API surface:

- Model resources as nouns; let HTTP methods carry the verbs. Avoid RPC-ish
  paths like `/getUser`.
- Be consistent about casing, pluralization, pagination parameters, and
  error envelope across every endpoint.
- Errors: correct status code, machine-readable error code, human-readable
  message, and a request id for correlation.
- Version from day one (path or header) and document the compatibility
  policy.
- Design for the consumer: include the fields clients actually need,
  support sparse fieldsets or expansion instead of N+1 round trips.

Deliver endpoint tables (method, path, request, response, errors) plus notes
on auth and rate limiting.
"#;
