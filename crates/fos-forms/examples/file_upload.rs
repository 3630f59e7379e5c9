//! Example: Populating a form from a multipart upload

use fos_forms::{attr, Element, Form, FormConfig, TemplateRegistry, MULTIPART_DATA};
use tracing_subscriber::EnvFilter;

const BOUNDARY: &str = "fos-upload";

fn upload_body() -> String {
    let mut body = String::new();
    for (name, filename, content) in [
        ("title", None, "Board minutes"),
        ("documents", Some("minutes.pdf"), "%PDF-1.7"),
        ("documents", Some("budget.xlsx"), "PK"),
    ] {
        body.push_str(&format!("--{}\r\n", BOUNDARY));
        match filename {
            Some(filename) => body.push_str(&format!(
                concat!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    "Content-Type: application/octet-stream\r\n",
                ),
                name, filename
            )),
            None => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{}\"\r\n",
                name
            )),
        }
        body.push_str(&format!("\r\n{}\r\n", content));
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));
    body
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let registry = TemplateRegistry::new();
    let config = FormConfig {
        max_memory: 1024 * 1024, // 1MB
    };

    let mut form = Form::with_config(config)
        .with_attributes([attr("enctype", MULTIPART_DATA), attr("action", "/upload")])
        .with_child(Element::text("title").with_label("Title").required(true))
        .with_child(
            Element::file("documents")
                .with_label("Documents")
                .with_attribute("multiple", true),
        )
        .with_child(Element::submit("upload").with_value("Upload"));

    let content_type = format!("{}; boundary={}", MULTIPART_DATA, BOUNDARY);
    form.populate_from_request(&content_type, upload_body().as_bytes())?;

    tracing::info!("Uploaded: {}", form.elements()["documents"].value());
    println!("{}", form.render(&registry));
    Ok(())
}
