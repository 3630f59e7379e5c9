//! Comprehensive tests for fos-forms
//!
//! Building, rendering, populating and binding complete forms.

use fos_forms::{
    attr, option, Bindable, Bindings, Container, Element, FieldSet, Form, Group, Modifier, Node,
    Submission, TemplateRegistry, UploadedFile, MULTIPART_DATA,
};

#[derive(Debug, Default)]
struct Upload {
    title: String,
    documents: Vec<String>,
}

impl Bindable for Upload {
    fn bindings() -> Bindings<Self> {
        Bindings::<Self>::new()
            .bind("title", |u| &u.title, |u| &mut u.title)
            .bind("documents", |u| &u.documents, |u| &mut u.documents)
    }
}

fn upload_form() -> Form {
    Form::new()
        .with_attributes([attr("enctype", MULTIPART_DATA)])
        .with_child(Element::text("title").with_label("Title").required(true))
        .with_child(FieldSet::new("Files").with_child(Element::file("documents")))
}

#[test]
fn test_required_element_validity() {
    for value in ["", "x", "John Doe"] {
        let optional = Element::text("name").with_value(value);
        assert!(optional.is_valid());

        let required = Element::text("name").with_value(value).required(true);
        assert_eq!(required.is_valid(), !value.is_empty());
    }
}

#[test]
fn test_populate_text_field() {
    let mut form = Form::new().with_child(Element::text("name"));
    form.populate_from_submission(&Submission::new().with_field("name", "John Doe"));

    assert_eq!(form.elements()["name"].value(), "John Doe");
}

#[test]
fn test_populate_file_field() {
    let mut form = upload_form();
    let submission = Submission::new()
        .with_content_type(MULTIPART_DATA)
        .with_file("documents", UploadedFile::new("a.pdf"))
        .with_file("documents", UploadedFile::new(""))
        .with_file("documents", UploadedFile::new("b.pdf"));

    form.populate_from_submission(&submission);
    assert_eq!(form.elements()["documents"].value(), "a.pdf, b.pdf");
}

#[test]
fn test_bind_file_list() {
    let mut form = upload_form();
    form.populate_from_submission(
        &Submission::new()
            .with_field("title", "Quarterly")
            .with_file("documents", UploadedFile::new("a.pdf"))
            .with_file("documents", UploadedFile::new("b.pdf")),
    );

    let mut upload = Upload::default();
    form.populate(&mut upload);

    assert_eq!(upload.title, "Quarterly");
    assert_eq!(upload.documents, vec!["a.pdf", "b.pdf"]);
    assert!(form.is_valid());
}

#[test]
fn test_struct_round_trip() {
    let original = Upload {
        title: "Report".to_string(),
        documents: vec!["x.txt".to_string(), "y.txt".to_string()],
    };

    let mut form = upload_form();
    form.populate_from_struct(&original);

    let mut copy = Upload::default();
    form.populate(&mut copy);
    assert_eq!(copy.title, original.title);
    assert_eq!(copy.documents, original.documents);
}

#[test]
fn test_flattening_one_level() {
    let form = Form::new().with_child(Element::text("x")).with_child(
        FieldSet::new("Nested")
            .with_child(Element::text("y"))
            .with_child(Element::text("z"))
            .with_child(FieldSet::new("Deeper").with_child(Element::text("w"))),
    );

    let elements = form.elements();
    assert_eq!(elements.len(), 3);
    for name in ["x", "y", "z"] {
        assert!(elements.contains_key(name), "missing {name}");
    }
    assert!(!elements.contains_key("w"));
}

#[test]
fn test_render_text_element() {
    let registry = TemplateRegistry::new();
    let element = Element::text("username")
        .with_id("user")
        .with_label("Username")
        .with_value("john")
        .required(true);

    assert_eq!(
        element.render(&registry).as_str(),
        concat!(
            r#"<div><label for="user">Username <span>*</span></label><div>"#,
            r#"<input aria-errormessage="user-error" aria-invalid="false" aria-required="true" "#,
            r#"id="user" name="username" required type="text" value="john"></div></div>"#,
        )
    );
}

#[test]
fn test_render_error_and_hint() {
    let registry = TemplateRegistry::new();
    let element = Element::email("email")
        .with_id("email")
        .with_hint("We never share it")
        .with_error("Invalid email");

    let html = element.render(&registry);
    assert!(html.as_str().contains(r#"aria-describedby="email-hint""#));
    assert!(html.as_str().contains(concat!(
        r#"<span id="email-error">Invalid email</span>"#,
        r#"<i id="email-hint">We never share it</i>"#,
    )));
}

#[test]
fn test_render_select() {
    let registry = TemplateRegistry::new();
    let element = Element::select("size")
        .with_id("size")
        .with_options([option("Small", "s"), option("Large", "l")])
        .with_value("l");

    assert_eq!(
        element.render(&registry).as_str(),
        concat!(
            r#"<div><div><select aria-errormessage="size-error" aria-invalid="false" "#,
            r#"aria-required="false" id="size" name="size">"#,
            r#"<option value="s">Small</option><option value="l" selected>Large</option>"#,
            r#"</select></div></div>"#,
        )
    );
}

#[test]
fn test_render_textarea_value_as_content() {
    let registry = TemplateRegistry::new();
    let html = Element::textarea("bio").with_value("a < b & c").render(&registry);

    assert!(html.as_str().contains(">a &lt; b &amp; c</textarea>"));
    assert!(!html.as_str().contains("value="));
}

#[test]
fn test_render_form() {
    let registry = TemplateRegistry::new();
    let form = Form::new()
        .with_attributes([Modifier::id("login"), attr("action", "/login")])
        .with_error("Bad credentials");

    assert_eq!(
        form.render(&registry).as_str(),
        concat!(
            r#"<form action="/login" aria-errormessage="login-error" "#,
            r#"enctype="application/x-www-form-urlencoded" id="login" method="POST">"#,
            r#"<span id="login-error">Bad credentials</span></form>"#,
        )
    );
}

#[test]
fn test_render_nested_tree() {
    let registry = TemplateRegistry::new();
    let form = Form::new()
        .with_child(FieldSet::new("Account").with_child(Element::text("username")))
        .with_child(Group::new().with_child(Element::submit("save")));

    let html = form.render(&registry);
    let html = html.as_str();
    let fieldset = html.find("<fieldset><legend>Account</legend>").unwrap();
    let group = html.find(r#"<div role="group"><input "#).unwrap();
    assert!(fieldset < group);
    assert!(html.ends_with("</div></form>"));
}

#[test]
fn test_override_template() {
    let registry = TemplateRegistry::with_overrides([(
        "input",
        "<p>{{ label }}: <input {{ form_attributes(attributes) }}></p>",
    )])
    .unwrap();

    let html = Element::hidden("token")
        .with_id("token")
        .with_label("Token")
        .render(&registry);
    assert_eq!(
        html.as_str(),
        r#"<p>Token: <input aria-errormessage="token-error" aria-invalid="false" aria-required="false" id="token" name="token" type="hidden"></p>"#
    );
}

#[test]
fn test_children_mutation() {
    let mut form = Form::new().with_child(Group::new().with_child(Element::text("city")));

    if let Some(Node::Group(group)) = form.children_mut().first_mut() {
        group.add_child(Element::text("zip"));
    }
    assert_eq!(form.children()[0].children().len(), 2);
    assert!(form.elements().contains_key("zip"));
}

#[derive(Debug, Default)]
struct Contact {
    email: String,
    age: u8,
}

#[test]
fn test_local_binding_table() {
    let bindings = Bindings::<Contact>::new()
        .bind("email", |c| &c.email, |c| &mut c.email)
        .bind("age", |c| &c.age, |c| &mut c.age);

    let mut form = Form::new()
        .with_child(Element::email("email").required(true))
        .with_child(Element::number("age"));
    form.populate_from_submission(
        &Submission::new()
            .with_field("email", "jane@example.com")
            .with_field("age", "29"),
    );

    let mut contact = Contact::default();
    form.populate_with(&mut contact, &bindings);
    assert_eq!(contact.email, "jane@example.com");
    assert_eq!(contact.age, 29);

    let mut other = Form::new().with_child(Element::email("email").required(true));
    other.populate_from_struct_with(&Contact::default(), &bindings);
    assert!(!other.is_valid());
    assert_eq!(bindings.fields().collect::<Vec<_>>(), ["email", "age"]);
}
