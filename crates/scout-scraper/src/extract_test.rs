use super::*;

fn html_page(head: &str, body: &str) -> String {
    format!("<!DOCTYPE html><html><head>{head}</head><body>{body}</body></html>")
}

// -----------------------------------------------------------------------
// title / description
// -----------------------------------------------------------------------

#[test]
fn title_prefers_og_site_name_over_title_element() {
    let html = html_page(
        r#"<title>Home | Whatever</title>
           <meta property="og:title" content="Welcome">
           <meta property="og:site_name" content="  Hackney Food Bank ">"#,
        "",
    );
    assert_eq!(extract(&html).title, "Hackney Food Bank");
}

#[test]
fn title_falls_back_to_og_title() {
    let html = html_page(
        r#"<title>Ignored</title><meta property="og:title" content="Shelter Scotland">"#,
        "",
    );
    assert_eq!(extract(&html).title, "Shelter Scotland");
}

#[test]
fn title_uses_title_element_without_meta_tags() {
    let html = html_page("<title>  Foo  </title>", "");
    assert_eq!(extract(&html).title, "Foo");
}

#[test]
fn blank_og_site_name_does_not_block_later_strategies() {
    let html = html_page(
        r#"<meta property="og:site_name" content="   "><title>Foo</title>"#,
        "",
    );
    assert_eq!(extract(&html).title, "Foo");
}

#[test]
fn title_element_keeps_inner_whitespace() {
    let html = html_page("<title>\n  Hope\n  Shelter \n</title>", "");
    assert_eq!(extract(&html).title, "Hope\n  Shelter");
}

#[test]
fn description_comes_from_meta_description() {
    let html = html_page(
        r#"<meta name="description" content=" We feed families in need. ">"#,
        "",
    );
    assert_eq!(extract(&html).description, "We feed families in need.");
}

#[test]
fn empty_document_yields_empty_record() {
    assert_eq!(extract(""), ScrapedRecord::default());
}

// -----------------------------------------------------------------------
// phone
// -----------------------------------------------------------------------

#[test]
fn phone_uses_tel_anchor_text_as_rendered() {
    let html = html_page("", r#"<a href="tel:+441234567890">+441234567890</a>"#);
    assert_eq!(extract(&html).phone, "+441234567890");
}

#[test]
fn phone_is_anchor_text_not_href() {
    let html = html_page(
        "",
        r#"<p>Office 0207 946 0000</p><a href="tel:+441234567890">Call us</a>"#,
    );
    assert_eq!(extract(&html).phone, "Call us");
}

#[test]
fn phone_falls_back_to_text_pattern_without_whitespace() {
    let html = html_page("", "<p>Ring us on +44 20 7946 0000 any weekday.</p>");
    assert_eq!(extract(&html).phone, "+442079460000");
}

#[test]
fn phone_ignores_numbers_inside_scripts() {
    let html = html_page("", r#"<script>var id = "0123 456789";</script><p>No phone.</p>"#);
    assert_eq!(extract(&html).phone, "");
}

// -----------------------------------------------------------------------
// email
// -----------------------------------------------------------------------

#[test]
fn email_uses_mailto_anchor_text() {
    let html = html_page(
        "",
        r#"<a href="mailto:info@example.org">info@example.org</a> or admin@example.org"#,
    );
    assert_eq!(extract(&html).email, "info@example.org");
}

#[test]
fn email_falls_back_to_text_pattern() {
    let html = html_page("", "<p>Write to hello@foodbank.org.uk for help.</p>");
    assert_eq!(extract(&html).email, "hello@foodbank.org.uk");
}

#[test]
fn email_pattern_searches_script_text() {
    let html = html_page(
        "",
        r#"<p>Get in touch.</p><script>var contact = "help@shelter.org.uk";</script>"#,
    );
    assert_eq!(extract(&html).email, "help@shelter.org.uk");
}

// -----------------------------------------------------------------------
// opening hours: JSON-LD
// -----------------------------------------------------------------------

#[test]
fn opening_hours_specification_renders_day_lines() {
    let html = html_page(
        r#"<script type="application/ld+json">
           {"@type": "LocalBusiness",
            "openingHoursSpecification": [
              {"dayOfWeek": "Monday", "opens": "09:00", "closes": "17:00"}
            ]}
           </script>"#,
        "",
    );
    assert_eq!(extract(&html).opening_hours, "Monday: 09:00 - 17:00");
}

#[test]
fn opening_hours_specification_joins_multiple_days_with_newlines() {
    let html = html_page(
        r#"<script type="application/ld+json">
           {"openingHoursSpecification": [
              {"dayOfWeek": "Monday", "opens": "09:00", "closes": "17:00"},
              {"dayOfWeek": ["Saturday", "Sunday"], "opens": "10:00", "closes": "14:00"},
              {"opens": "08:00"}
           ]}
           </script>"#,
        "",
    );
    assert_eq!(
        extract(&html).opening_hours,
        "Monday: 09:00 - 17:00\nSaturday, Sunday: 10:00 - 14:00\nUnknown: 08:00 - "
    );
}

#[test]
fn opening_hours_string_is_used_verbatim() {
    let html = html_page(
        r#"<script type="application/ld+json">{"openingHours": "Mo-Fr 09:00-17:00"}</script>"#,
        r#"<div class="hours">Never used</div>"#,
    );
    assert_eq!(extract(&html).opening_hours, "Mo-Fr 09:00-17:00");
}

#[test]
fn opening_hours_array_is_newline_joined() {
    let html = html_page(
        r#"<script type="application/ld+json">{"openingHours": ["Mo-Fr 09:00-17:00", "Sa 10:00-12:00"]}</script>"#,
        "",
    );
    assert_eq!(
        extract(&html).opening_hours,
        "Mo-Fr 09:00-17:00\nSa 10:00-12:00"
    );
}

#[test]
fn opening_hours_takes_precedence_over_specification_in_same_node() {
    let html = html_page(
        r#"<script type="application/ld+json">
           {"openingHours": "Mo-Su 24/7",
            "openingHoursSpecification": [{"dayOfWeek": "Monday", "opens": "09:00", "closes": "17:00"}]}
           </script>"#,
        "",
    );
    assert_eq!(extract(&html).opening_hours, "Mo-Su 24/7");
}

#[test]
fn malformed_json_ld_block_is_skipped() {
    let html = html_page(
        r#"<script type="application/ld+json">{ "openingHours": </script>
           <script type="application/ld+json">{"openingHours": "Tu-Th 10:00-16:00"}</script>"#,
        "",
    );
    assert_eq!(extract(&html).opening_hours, "Tu-Th 10:00-16:00");
}

#[test]
fn json_ld_graph_nodes_are_searched() {
    let html = html_page(
        r#"<script type="application/ld+json">
           {"@context": "https://schema.org",
            "@graph": [
              {"@type": "WebSite", "name": "Example"},
              {"@type": "NGO", "openingHours": "Mo-Fr 08:30-16:30"}
            ]}
           </script>"#,
        "",
    );
    assert_eq!(extract(&html).opening_hours, "Mo-Fr 08:30-16:30");
}

#[test]
fn json_ld_without_hours_falls_through_to_class_search() {
    let html = html_page(
        r#"<script type="application/ld+json">{"@type": "Organization", "name": "X"}</script>"#,
        r#"<section class="contact opening-hours"> Mon-Fri: 9am - 5pm </section>"#,
    );
    assert_eq!(extract(&html).opening_hours, "Mon-Fri: 9am - 5pm");
}

// -----------------------------------------------------------------------
// opening hours: class search and regex fallback
// -----------------------------------------------------------------------

#[test]
fn class_search_follows_candidate_priority() {
    let html = html_page(
        "",
        r#"<div class="business-hours">Business</div><div class="hours">Plain</div>"#,
    );
    assert_eq!(extract(&html).opening_hours, "Plain");
}

#[test]
fn empty_class_element_is_skipped() {
    let html = html_page(
        "",
        r#"<div class="hours">   </div><p class="operating-hours">Tue 10:00 - 15:00</p>"#,
    );
    assert_eq!(extract(&html).opening_hours, "Tue 10:00 - 15:00");
}

#[test]
fn regex_fallback_matches_weekday_range_across_lines() {
    let html = html_page(
        "",
        "<p>We are open\nMonday to Sunday\nfrom 9:00 AM until 5:30 PM.</p>",
    );
    assert_eq!(
        extract(&html).opening_hours,
        "Monday to Sunday\nfrom 9:00 AM until 5:30 PM"
    );
}

#[test]
fn regex_fallback_single_day_pattern() {
    let html = html_page("", "<p>Drop-in: Wednesday 10:00 - 12:00 only.</p>");
    assert_eq!(extract(&html).opening_hours, "Wednesday 10:00 - 12:00");
}

#[test]
fn regex_fallback_searches_script_text() {
    let html = html_page(
        "",
        r#"<script>window.hours = "Friday 09:00 - 13:00";</script><p>Visit us.</p>"#,
    );
    assert_eq!(extract(&html).opening_hours, "Friday 09:00 - 13:00");
}

#[test]
fn missing_opening_hours_is_empty_string() {
    let html = html_page("<title>No hours here</title>", "<p>Just some text.</p>");
    assert_eq!(extract(&html).opening_hours, "");
}
