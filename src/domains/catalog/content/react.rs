//! React category prompts.

/// Prompts registered under the `react` category, in registration order.
pub const PROMPTS: &[(&str, &str)] = &[
    ("component-creation", COMPONENT_CREATION),
    ("hooks-best-practices", HOOKS_BEST_PRACTICES),
    ("state-management", STATE_MANAGEMENT),
    ("performance-optimization", PERFORMANCE_OPTIMIZATION),
];

const COMPONENT_CREATION: &str = r#"# React Component Creation

You are helping create a new React component. Follow these guidelines:

## Structure
- Use a function component with TypeScript props.
- Keep the component focused on a single responsibility; extract a child
  component when the JSX grows past one screen.
- Co-locate the component, its styles, and its tests in one directory.

## Props
- Define an explicit `Props` interface; avoid `any`.
- Prefer composition (`children`, render props) over boolean configuration
  flags.
- Destructure props in the signature and provide defaults there.

## Output
Produce the component file, a minimal usage example, and note any required
peer state or context providers.
"#;

const HOOKS_BEST_PRACTICES: &str = r#"# React Hooks Best Practices

Review or write hook usage with these rules in mind:

- Call hooks only at the top level, never inside conditions or loops.
- Keep dependency arrays honest: include every referenced binding, and
  restructure the effect rather than silencing the lint rule.
- Extract reusable logic into a custom `useXxx` hook once two components
  need it.
- Effects are for synchronizing with external systems. Derive values during
  render instead of mirroring props into state.
- Clean up subscriptions and timers in the effect's return function.

When suggesting changes, show the before/after of the affected hook and
explain which rule it violated.
"#;

const STATE_MANAGEMENT: &str = r#"# React State Management

Help decide where state should live and how it should flow:

1. Start with local `useState` in the component that renders the value.
2. Lift state to the nearest common ancestor only when two siblings need it.
3. Reach for context when the same value threads through more than two or
   three layers - theme, locale, session.
4. Introduce an external store (Redux, Zustand, Jotai) only for state that is
   genuinely global, frequently updated, and shared across routes.

For server data, prefer a query library (TanStack Query, SWR) over hand-rolled
fetch-and-store effects: it handles caching, deduplication, and revalidation.

State shape advice: keep it flat, store ids not object copies, and derive
aggregates in selectors.
"#;

const PERFORMANCE_OPTIMIZATION: &str = r#"# React Performance Optimization

Diagnose and fix rendering performance problems:

## Measure first
Use the React DevTools Profiler before changing code. Identify which
components re-render and why (props, state, context, parent).

## Common fixes
- Memoize expensive child trees with `React.memo`; memoize callbacks and
  derived objects passed to them with `useCallback`/`useMemo`.
- Split wide context values so consumers only subscribe to what they read.
- Virtualize long lists (react-window) instead of rendering thousands of rows.
- Move static data and component definitions out of the render path.
- Code-split routes and heavy widgets with `React.lazy` and `Suspense`.

Report findings as: symptom, measured cause, fix, expected improvement.
"#;
