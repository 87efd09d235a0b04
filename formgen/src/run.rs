//! Form build pipeline orchestration.
//!
//! Runs the linear build sequence against an already-authenticated
//! [`FormsApi`]: load the bank, create the form, enable quiz mode, land
//! the structure batch, attach branching, and nudge the publish state.
//! The first four stages abort on failure; branching and publishing
//! degrade to printed warnings because the form is already usable and
//! both can be finished by hand in the editor.

use std::io::Write;

use placement_bank::{QuestionBank, load_bank};

use crate::branching::branching_requests;
use crate::cli::Cli;
use crate::error::{FormgenError, Result};
use crate::forms::FormsApi;
use crate::output::success_text;
use crate::plan::{StructurePlan, build_structure};
use crate::wire::{
    FormDocument, FormSettings, QUIZ_MASK, QuizSettings, Request, UpdateSettingsRequest,
};

/// Execute the full build sequence, writing progress to `out`.
///
/// # Errors
///
/// Returns an error when the bank cannot be loaded or rendered, or when
/// form creation, quiz mode, or the structure batch fails. Branching
/// and publish failures are reported as warnings instead.
pub fn run(cli: &Cli, api: &dyn FormsApi, out: &mut dyn Write) -> Result<()> {
    let bank = load_stage(cli, out)?;

    emit(out, "\nStep 3: Creating blank form...")?;
    let form = api.create_form(&cli.title)?;
    emit(out, format!("✓ Created blank form with ID: {}", form.form_id))?;

    emit(out, "\nStep 4: Enabling quiz mode...")?;
    api.batch_update(&form.form_id, &[quiz_mode_request()])?;
    emit(out, "✓ Enabled quiz mode")?;

    let plan = structure_stage(&bank, api, &form.form_id, out)?;
    let readback = branching_stage(api, &form.form_id, out)?;
    publish_stage(api, &form.form_id, out)?;

    let responder_uri = readback.as_ref().and_then(|f| f.responder_uri.as_deref());
    emit(out, success_text(&form.form_id, responder_uri))?;
    log::debug!(
        "form {} built with {} items",
        form.form_id,
        plan.item_count()
    );
    Ok(())
}

/// Load the question bank and echo its size.
fn load_stage(cli: &Cli, out: &mut dyn Write) -> Result<QuestionBank> {
    emit(out, "Step 2: Loading question bank...")?;
    let bank = load_bank(&cli.bank)?;
    emit(
        out,
        format!("✓ Loaded {} questions from bank", bank.questions.len()),
    )?;
    Ok(bank)
}

/// Assemble and land the structure batch.
fn structure_stage(
    bank: &QuestionBank,
    api: &dyn FormsApi,
    form_id: &str,
    out: &mut dyn Write,
) -> Result<StructurePlan> {
    emit(out, "\nStep 5: Building form structure...")?;
    let plan = build_structure(bank)?;
    api.batch_update(form_id, &plan.requests)?;
    emit(
        out,
        format!("✓ Created form structure with {} items", plan.item_count()),
    )?;
    let [band1, band2, band3] = plan.band_counts;
    emit(out, format!("  - Band 1: {band1} questions"))?;
    emit(out, format!("  - Band 2: {band2} questions"))?;
    emit(out, format!("  - Band 3: {band3} questions"))?;
    Ok(plan)
}

/// Attach branching; failures degrade to a warning. Returns the form
/// readback when one was obtained so the caller can reuse its URLs.
fn branching_stage(
    api: &dyn FormsApi,
    form_id: &str,
    out: &mut dyn Write,
) -> Result<Option<FormDocument>> {
    emit(out, "\nStep 6: Setting up branching logic...")?;
    let form = match api.get_form(form_id) {
        Ok(form) => form,
        Err(error) => {
            branching_warning(out, &error)?;
            return Ok(None);
        }
    };
    let requests = branching_requests(&form);
    if requests.is_empty() {
        emit(
            out,
            "⚠ Warning: Could not set up branching: expected items not found in form",
        )?;
        emit(
            out,
            "  You may need to configure routing manually in the form UI",
        )?;
        return Ok(Some(form));
    }
    match api.batch_update(form_id, &requests) {
        Ok(()) => {
            emit(out, "✓ Set up branching logic")?;
            emit(out, "  - Gate question routes all paths to Band 1")?;
            emit(
                out,
                "  - Routing question: Path A → Submit, Path B/C → Band 2",
            )?;
        }
        Err(error) => branching_warning(out, &error)?,
    }
    Ok(Some(form))
}

fn branching_warning(out: &mut dyn Write, error: &FormgenError) -> Result<()> {
    emit(out, format!("⚠ Warning: Could not set up branching: {error}"))?;
    emit(
        out,
        "  You may need to configure routing manually in the form UI",
    )
}

/// Re-assert quiz settings as a publish nudge; failures degrade to a
/// warning because the accepting-responses toggle is manual anyway.
fn publish_stage(api: &dyn FormsApi, form_id: &str, out: &mut dyn Write) -> Result<()> {
    emit(out, "\nStep 7: Publishing form...")?;
    match api.batch_update(form_id, &[quiz_mode_request()]) {
        Ok(()) => {
            emit(out, "✓ Form configured")?;
            emit(
                out,
                "⚠  Note: You may need to manually enable 'Accepting responses'",
            )?;
            emit(
                out,
                "   In the form editor, click the toggle at the top to start accepting responses",
            )
        }
        Err(error) => {
            emit(
                out,
                format!("⚠ Warning: Could not fully configure form: {error}"),
            )?;
            emit(out, "  You may need to enable 'Accepting responses' manually")
        }
    }
}

/// The quiz-mode settings request, used both to enable grading and as
/// the publish nudge.
fn quiz_mode_request() -> Request {
    Request::UpdateSettings(UpdateSettingsRequest {
        settings: FormSettings {
            quiz_settings: QuizSettings { is_quiz: true },
        },
        update_mask: QUIZ_MASK.to_owned(),
    })
}

/// Write one line, mapping failures to [`FormgenError::WriteFailed`].
fn emit(out: &mut dyn Write, line: impl AsRef<str>) -> Result<()> {
    writeln!(out, "{}", line.as_ref())
        .map_err(|source| FormgenError::WriteFailed { source })
}
