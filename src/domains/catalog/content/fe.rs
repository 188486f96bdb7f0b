//! General frontend category prompts.

/// Prompts registered under the `fe` category, in registration order.
pub const PROMPTS: &[(&str, &str)] = &[
    ("css-architecture", CSS_ARCHITECTURE),
    ("responsive-design", RESPONSIVE_DESIGN),
    ("accessibility-review", ACCESSIBILITY_REVIEW),
];

const CSS_ARCHITECTURE: &str = r#"# CSS Architecture

Guide the styling approach for this codebase:

- Pick one system and stay consistent: utility classes (Tailwind), CSS
  Modules, or a design-token based component library. Do not mix ad-hoc
  global styles into any of them.
- Express spacing, color, and typography through design tokens or theme
  variables; never hard-code pixel values or hex colors in components.
- Keep specificity flat: one class per rule where possible, no id selectors,
  no `!important` outside third-party overrides.
- Co-locate styles with their component and delete them together.

When reviewing CSS, flag selector nesting deeper than two levels, duplicated
magic numbers, and styles that belong in the theme.
"#;

const RESPONSIVE_DESIGN: &str = r#"# Responsive Design

Make the layout work across viewport sizes:

- Design mobile-first: base styles for small screens, `min-width` media
  queries for progressively larger ones.
- Prefer intrinsic layout (flexbox wrap, CSS grid `auto-fit`/`minmax`,
  `clamp()` for fluid type) over breakpoint-per-device hacks.
- Use relative units (`rem`, `%`, `ch`) for sizing; reserve pixels for
  borders and shadows.
- Test at 320px, 768px, 1024px, and 1440px, plus one landscape phone size.
- Never disable user zoom, and keep tap targets at least 44x44 CSS pixels.

Deliver the layout plan as: structure, breakpoints actually needed, and
which elements reflow at each.
"#;

const ACCESSIBILITY_REVIEW: &str = r#"# Accessibility Review

Audit the given markup or component for accessibility:

1. **Semantics** - native elements before ARIA: `button` not clickable
   `div`, headings in order, landmarks (`nav`, `main`) present.
2. **Keyboard** - every interaction reachable by Tab, visible focus ring,
   no keyboard traps, Escape closes overlays.
3. **Labels** - form fields with `label`, icon buttons with an accessible
   name, images with meaningful `alt` or empty `alt` when decorative.
4. **Contrast** - text at 4.5:1 minimum (3:1 for large text), state not
   conveyed by color alone.
5. **Dynamic content** - focus moved into dialogs and returned on close,
   live regions for async status messages.

Report each issue with the WCAG criterion, severity, and a concrete fix.
"#;
