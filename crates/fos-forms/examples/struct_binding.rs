//! Example: Binding a record to a form and back

use fos_forms::{option, Bindable, Bindings, Element, Form, Submission, TemplateRegistry};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Profile {
    name: String,
    age: u32,
    country: String,
    newsletter: bool,
    interests: Vec<String>,
    website: Option<String>,
}

impl Bindable for Profile {
    fn bindings() -> Bindings<Self> {
        Bindings::<Self>::new()
            .bind("name", |p| &p.name, |p| &mut p.name)
            .bind("age", |p| &p.age, |p| &mut p.age)
            .bind("country", |p| &p.country, |p| &mut p.country)
            .bind("newsletter", |p| &p.newsletter, |p| &mut p.newsletter)
            .bind("interests", |p| &p.interests, |p| &mut p.interests)
            .bind("website", |p| &p.website, |p| &mut p.website)
    }
}

fn profile_form() -> Form {
    Form::new()
        .with_child(Element::text("name").with_label("Name").required(true))
        .with_child(Element::number("age").with_label("Age"))
        .with_child(
            Element::select("country")
                .with_label("Country")
                .with_options([option("Spain", "es"), option("Portugal", "pt")]),
        )
        .with_child(Element::checkbox("newsletter").with_label("Newsletter"))
        .with_child(Element::text("interests").with_hint("Comma separated"))
        .with_child(Element::url("website").with_label("Website"))
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let registry = TemplateRegistry::new();

    // Record -> form
    let stored = Profile {
        name: "Jane Doe".to_string(),
        age: 34,
        country: "pt".to_string(),
        newsletter: true,
        interests: vec!["rust".to_string(), "forms".to_string()],
        website: None,
    };
    let mut form = profile_form();
    form.populate_from_struct(&stored);
    println!("{}", form.render(&registry));

    // Submission -> form -> record
    let submission =
        Submission::from_query("name=John+Doe&age=41&country=es&interests=cycling,+chess");
    let mut form = profile_form();
    form.populate_from_submission(&submission);

    let mut profile = Profile::default();
    form.populate(&mut profile);
    tracing::info!("Bound profile: {:?}", profile);

    Ok(())
}
