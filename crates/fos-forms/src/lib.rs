//! fOS Forms
//!
//! Declarative HTML form construction.
//!
//! Forms are trees of elements, groups and fieldsets. Each node renders
//! through a named template from a [`TemplateRegistry`]; forms can be filled
//! from a request body and bound to typed records.
//!
//! # Example
//! ```rust,ignore
//! use fos_forms::{Element, FieldSet, Form, TemplateRegistry};
//!
//! let registry = TemplateRegistry::new();
//! let mut form = Form::new().with_child(
//!     FieldSet::new("Login")
//!         .with_child(Element::text("username").with_label("Username").required(true))
//!         .with_child(Element::password("password").with_label("Password").required(true)),
//! );
//!
//! form.populate_from_request("application/x-www-form-urlencoded", body)?;
//! let html = form.render(&registry);
//! ```

mod binding;
mod config;
mod element;
mod fieldset;
mod form;
mod group;
mod node;
mod populate;
mod submission;

pub use binding::{BindValue, Bindable, Bindings};
pub use config::FormConfig;
pub use element::{option, Element, ElementKind, SelectOption};
pub use fieldset::FieldSet;
pub use form::{Form, METHOD_POST, MULTIPART_DATA, URL_ENCODED_DATA};
pub use group::Group;
pub use node::{Container, Node};
pub use submission::{Submission, SubmissionError, UploadedFile};

// Re-export sub-crates
pub use fos_attrs as attrs;
pub use fos_templates as templates;

pub use fos_attrs::{attr, AttributeSet, AttributeValue, Modifier};
pub use fos_templates::{Markup, TemplateName, TemplateRegistry};
