//! Success URLs and the manual follow-up checklist.

use placement_bank::RULE;

/// Edit URL for a form id.
#[must_use]
pub fn edit_url(form_id: &str) -> String {
    format!("https://docs.google.com/forms/d/{form_id}/edit")
}

/// Respondent URL for a form id, used when the readback carried none.
#[must_use]
pub fn view_url(form_id: &str) -> String {
    format!("https://docs.google.com/forms/d/{form_id}/viewform")
}

/// Render the closing success block: both URLs plus the follow-up steps
/// the Forms API cannot perform.
#[must_use]
pub fn success_text(form_id: &str, responder_uri: Option<&str>) -> String {
    let edit = edit_url(form_id);
    let view = responder_uri.map_or_else(|| view_url(form_id), str::to_owned);
    let mut text = String::new();
    text.push('\n');
    text.push_str(RULE);
    text.push_str("\n✓ FORM CREATED SUCCESSFULLY\n");
    text.push_str(RULE);
    text.push_str("\n\n📝 Edit form (instructor):\n");
    text.push_str(&format!("   {edit}\n"));
    text.push_str("\n👥 Share with students:\n");
    text.push_str(&format!("   {view}\n"));
    text.push('\n');
    text.push_str(RULE);
    text.push_str("\n\n⚠️  MANUAL STEPS REQUIRED:\n");
    text.push_str("   1. Open the edit URL above\n");
    text.push_str(
        "   2. 🔴 IMPORTANT: Click the toggle at the top to 'Start accepting responses'\n",
    );
    text.push_str("      (Forms created via API default to NOT accepting responses)\n");
    text.push_str(
        "   3. Click 'Responses' → 'Link to Sheets' to create response spreadsheet\n",
    );
    text.push_str("   4. Go to Settings (⚙️) → Enable 'Collect email addresses'\n");
    text.push_str("   5. Test the form with dummy submissions for all three paths\n");
    text.push_str(RULE);
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_embed_the_form_id() {
        assert_eq!(
            edit_url("abc123"),
            "https://docs.google.com/forms/d/abc123/edit"
        );
        assert_eq!(
            view_url("abc123"),
            "https://docs.google.com/forms/d/abc123/viewform"
        );
    }

    #[test]
    fn readback_responder_uri_wins_over_the_fallback() {
        let text = success_text("abc123", Some("https://forms.gle/xyz"));
        assert!(text.contains("https://forms.gle/xyz"));
        assert!(!text.contains("/viewform"));
    }

    #[test]
    fn fallback_view_url_is_used_without_a_responder_uri() {
        let text = success_text("abc123", None);
        assert!(text.contains("https://docs.google.com/forms/d/abc123/viewform"));
    }

    #[test]
    fn checklist_names_every_manual_step() {
        let text = success_text("abc123", None);
        assert!(text.contains("FORM CREATED SUCCESSFULLY"));
        assert!(text.contains("MANUAL STEPS REQUIRED"));
        assert!(text.contains("Start accepting responses"));
        assert!(text.contains("Link to Sheets"));
        assert!(text.contains("Collect email addresses"));
        assert!(text.contains("all three paths"));
    }
}
