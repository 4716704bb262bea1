//! Server-rendered views: the recruitment form and the confirmation page.
//!
//! The select options come from the option tables in `recruit-core`, so the
//! rendered form and the stored values cannot drift apart.

use axum::response::Html;
use recruit_core::models::{Branch, FieldKey, Section, Vertical};

/// GET /
pub async fn form_page() -> Html<String> {
    let branch_options = render_options(Branch::ALL.iter().map(|b| (b.label(), b.label())));
    let vertical_options = render_options(Vertical::ALL.iter().map(|v| (v.value(), v.label())));
    let section_options = render_options(Section::ALL.iter().map(|s| (s.label(), s.label())));

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Recruitment Form</title>
</head>
<body>
  <main>
    <h1>Recruitment Form</h1>
    <form action="/api/applications" method="post" enctype="multipart/form-data">
      <label for="name">{name_label} *</label>
      <input type="text" id="name" name="name">

      <label for="sc_no">{sc_no_label} *</label>
      <input type="text" id="sc_no" name="sc_no">

      <label for="branch">{branch_label} *</label>
      <select id="branch" name="branch">
        <option value="">Select your branch</option>
{branch_options}      </select>

      <label for="vertical1">{vertical1_label} *</label>
      <select id="vertical1" name="vertical1">
        <option value="">Select a vertical</option>
{vertical_options}      </select>

      <label for="vertical2">{vertical2_label}</label>
      <select id="vertical2" name="vertical2">
        <option value="">Select a vertical (optional)</option>
{vertical_options}      </select>

      <label for="mob_no">{mob_no_label} *</label>
      <input type="tel" id="mob_no" name="mob_no">

      <label for="section">{section_label} *</label>
      <select id="section" name="section">
        <option value="">Select your section</option>
{section_options}      </select>

      <label for="mail">{mail_label} *</label>
      <input type="email" id="mail" name="mail">

      <label for="portfolio">Portfolio (optional)</label>
      <input type="file" id="portfolio" name="portfolio">

      <button type="submit">Submit</button>
    </form>
  </main>
</body>
</html>
"#,
        name_label = FieldKey::Name.label(),
        sc_no_label = FieldKey::ScNo.label(),
        branch_label = FieldKey::Branch.label(),
        vertical1_label = FieldKey::Vertical1.label(),
        vertical2_label = FieldKey::Vertical2.label(),
        mob_no_label = FieldKey::MobNo.label(),
        section_label = FieldKey::Section.label(),
        mail_label = FieldKey::Mail.label(),
        branch_options = branch_options,
        vertical_options = vertical_options,
        section_options = section_options,
    );

    Html(html)
}

/// GET /thank-you
pub async fn thank_you_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Thank You</title>
</head>
<body>
  <main>
    <h1>Thank you for applying!</h1>
    <p>Your application has been recorded. We will get back to you soon.</p>
    <a href="/">Back to the form</a>
  </main>
</body>
</html>
"#,
    )
}

fn render_options<'a>(options: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    options
        .map(|(value, label)| format!("        <option value=\"{}\">{}</option>\n", value, label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_form_renders_all_options() {
        let Html(html) = form_page().await;

        for branch in Branch::ALL {
            assert!(html.contains(branch.label()), "missing {}", branch.label());
        }
        for vertical in Vertical::ALL {
            assert!(html.contains(vertical.value()));
        }
        assert!(html.contains("B Arch A"));
        assert!(html.contains("B Plan"));
    }

    #[tokio::test]
    async fn test_form_posts_multipart_to_submission_endpoint() {
        let Html(html) = form_page().await;

        assert!(html.contains(r#"action="/api/applications""#));
        assert!(html.contains(r#"enctype="multipart/form-data""#));
        for key in FieldKey::REQUIRED {
            assert!(html.contains(&format!("name=\"{}\"", key.as_str())));
        }
        assert!(html.contains(r#"name="portfolio""#));
    }

    #[tokio::test]
    async fn test_thank_you_links_back_to_form() {
        let Html(html) = thank_you_page().await;
        assert!(html.contains("Thank you"));
        assert!(html.contains(r#"href="/""#));
    }
}
