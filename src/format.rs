//! Treefile Format Reference
//!
//! This module documents the text format as implemented by this library.
//!
//! # Overview
//!
//! A treefile is a line-oriented, human-editable rendering of a property
//! tree: named properties with one or more values, and named groups of
//! properties nested to any depth. It is intended for configuration and
//! small data files that people edit by hand.
//!
//! ## Design Philosophy
//!
//! - **Hand-editable**: one statement per line, no escape sequences to
//!   memorize, whitespace-tolerant
//! - **Order-preserving**: the in-memory tree keeps literal file order, and
//!   writing it back reproduces that order
//! - **Comment-preserving**: `#` lines survive a parse/write round trip at
//!   their original position
//! - **Structure by braces**: nesting is carried by `{` / `}` lines;
//!   indentation is purely cosmetic
//!
//! # Core Syntax
//!
//! ## Assignments
//!
//! A property is a name, an `=`, and one or more values divided by the
//! separator (comma by default):
//!
//! ```text
//! name = Alice
//! tags = red, green, blue
//! ```
//!
//! **Rules**:
//! - The name is everything before the first `=`, trimmed
//! - Values are trimmed individually; interior spaces survive
//! - A value containing the separator is wrapped in `"` quotes; inside
//!   quotes the separator is ordinary text
//! - Quotes purely toggle: there is **no** escape sequence for a literal
//!   quote inside a quoted value
//!
//! ## Groups
//!
//! A name on a line of its own becomes a group header when the next line is
//! `{`; the matching `}` closes the group:
//!
//! ```text
//! window
//! {
//!     width = 800
//!     height = 600
//! }
//! ```
//!
//! A name line not followed by `{` has no effect. A `}` with no open group
//! is a structural error. A `{` with no preceding name opens a group with
//! the empty name.
//!
//! ## Comments
//!
//! A line whose first non-whitespace character is `#` is preserved verbatim
//! as an opaque entry at its sibling position, and re-emitted as-is on
//! write:
//!
//! ```text
//! # network settings
//! host = localhost
//! ```
//!
//! # Grammar
//!
//! One statement per physical line, surrounding whitespace ignored:
//!
//! ```text
//! file        := { line }
//! line        := comment | node-close | assignment | bare-name-or-open
//! comment     := '#' any-text                      (preserved verbatim)
//! assignment  := name '=' value-list
//! value-list  := token { SEP token }
//! token       := quoted | raw
//! quoted      := '"' any-text-without-bare-quote '"'
//! node-close  := '}'
//! open-brace  := '{'
//! bare-name-or-open := name      (group header if the next line is '{')
//! ```
//!
//! # Typed Access
//!
//! Values are stored as text; numeric and boolean interpretation is
//! best-effort at access time, not enforced by the format:
//!
//! | Accessor | Accepts | Example text |
//! |----------|---------|--------------|
//! | [`get_int`] | decimal integers, optional `-` | `42`, `-7` |
//! | [`get_real`] | anything `f64` parses | `2.5`, `1e-6` |
//! | [`get_bool`] | exactly `true` / `false` | `true` |
//!
//! `get_int` on `"12.5"` is a format error, not a truncation.
//!
//! # Configuration Surface
//!
//! | Knob | Default | Notes |
//! |------|---------|-------|
//! | separator | `,` | must match between write and re-read |
//! | indent | one tab | cosmetic, write-side only |
//!
//! The format carries no marker for the separator in use; reading a file
//! with the wrong separator silently misinterprets value boundaries. This
//! is a caller contract.
//!
//! # Edge Cases
//!
//! - `name =` with nothing after the `=` stores no values and creates no
//!   property
//! - `tags = a,b,` (trailing separator) yields two values, not three
//! - `tags = ,x` (leading separator) yields an empty first value
//! - Duplicate names at one scope merge into the first occurrence's child;
//!   insertion order stays fixed at first creation
//! - Empty lines are ignored everywhere
//!
//! # Round-Trip Guarantees
//!
//! For any tree whose leaf values contain neither the separator nor a quote
//! character, writing and re-reading reproduces an equal tree: same child
//! order, same names, same per-leaf values. Values containing the separator
//! survive through quoting. Values containing a quote character do not
//! survive in general (quotes toggle and are consumed); this mirrors the
//! format's no-escaping rule.
//!
//! [`get_int`]: crate::Node::get_int
//! [`get_real`]: crate::Node::get_real
//! [`get_bool`]: crate::Node::get_bool

// This module contains only documentation; no implementation code
