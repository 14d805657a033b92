//! Template rendering for instantiated projects.
//!
//! Every file copied from the template tree is rendered with
//! [Handlebars](https://handlebarsjs.com/) via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! The render context is one object per namespace:
//! - `{{ project.name }}` — the project name given on the command line
//! - `{{ project.number }}` — the inferred sequence number (an integer)
//! - `{{ project.padded_number }}` — the number as it appears in the directory name
//! - `{{ <stem>.<key> }}` — a value from the context file `<stem>.yaml` / `<stem>.json`
//!
//! Files matching a no-replace pattern are copied verbatim, which is how to ship
//! files that legitimately contain `{{`.

pub mod renderer;
