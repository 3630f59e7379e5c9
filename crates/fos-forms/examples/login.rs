//! Example: Login form with a custom input template

use fos_forms::{attr, Element, FieldSet, Form, Group, Modifier, TemplateRegistry};
use tracing_subscriber::EnvFilter;

const INPUT_TEMPLATE: &str = r#"<p class="field">{% if label %}<label for="{{ id }}">{{ label }}</label>{% endif %}<input {{ form_attributes(attributes) }}>{{ error }}{{ hint }}</p>"#;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let registry = TemplateRegistry::with_overrides([("input", INPUT_TEMPLATE)])?;

    let mut form = Form::new()
        .with_attributes([Modifier::id("login"), attr("action", "/login")])
        .with_child(
            FieldSet::new("Sign in")
                .with_child(
                    Element::email("email")
                        .with_label("Email")
                        .with_hint("The address you registered with")
                        .required(true),
                )
                .with_child(Element::password("password").with_label("Password").required(true)),
        )
        .with_child(
            Group::new()
                .with_child(Element::submit("login").with_value("Log in"))
                .with_child(Element::reset("clear").with_value("Clear")),
        );

    form.populate_from_request("application/x-www-form-urlencoded", b"email=jane%40example.com")?;
    if !form.is_valid() {
        form.set_error("Please fill in all required fields.");
        for (name, message) in form.validation_errors() {
            tracing::info!("{}: {}", name, message);
        }
    }

    println!("{}", form.render(&registry));
    Ok(())
}
