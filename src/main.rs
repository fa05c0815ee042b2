//! Command-line front end for the redirect editor.
//!
//! Creates or updates a single redirect against the CMS backend, either from
//! flags or through interactive prompts.
//!
//! # Usage
//!
//! ```bash
//! # Create a redirect
//! redirect-editor create --source old/page --target /new/page --status-code 301
//!
//! # Update an existing redirect (as returned by the backend)
//! redirect-editor update --existing '{"sourceUriPath":"old/page","targetUriPath":"/new","statusCode":301}' \
//!     --target /newer
//!
//! # Fill the form field by field
//! redirect-editor interactive
//!
//! # Print the form as it would be rendered
//! redirect-editor view --source old/page
//! ```
//!
//! # Environment Variables
//!
//! See [`redirect_editor::config`] for the full list. A `.env` file is read if present.

use redirect_editor::config::{Config, load_from_env};
use redirect_editor::domain::draft::{DateField, TextField};
use redirect_editor::domain::entities::Redirect;
use redirect_editor::domain::repositories::RedirectListener;
use redirect_editor::editor::{HttpRedirectForm, build_form, init_tracing};
use redirect_editor::error::FormError;
use redirect_editor::infrastructure::notification::{ConsoleNotifier, Notifier, TracingNotifier};
use redirect_editor::utils::datetime::format_readable;
use redirect_editor::utils::input_normalizer::DateInput;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Select};
use std::path::PathBuf;
use std::sync::Arc;

/// Create and edit URL redirects.
#[derive(Parser)]
#[command(name = "redirect-editor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new redirect
    Create {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Update an existing redirect
    Update {
        #[command(flatten)]
        existing: ExistingArgs,

        #[command(flatten)]
        fields: FieldArgs,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Fill the form through prompts
    Interactive {
        #[command(flatten)]
        existing: ExistingArgs,
    },

    /// Print the rendered form as JSON
    View {
        #[command(flatten)]
        existing: ExistingArgs,

        #[command(flatten)]
        fields: FieldArgs,
    },
}

/// Redirect to edit, as JSON in the backend's format.
#[derive(Args)]
struct ExistingArgs {
    /// Redirect JSON
    #[arg(long, conflicts_with = "existing_file")]
    existing: Option<String>,

    /// File containing the redirect JSON
    #[arg(long)]
    existing_file: Option<PathBuf>,
}

/// Field values applied to the draft, in form order.
#[derive(Args)]
struct FieldArgs {
    /// Host the redirect applies to (empty for all hosts)
    #[arg(long)]
    host: Option<String>,

    /// Source path, e.g. "the-old-url/product-a"
    #[arg(short, long)]
    source: Option<String>,

    /// Target path or absolute URL
    #[arg(short, long)]
    target: Option<String>,

    /// HTTP status code
    #[arg(long)]
    status_code: Option<u16>,

    /// Start of validity, "YYYY-MM-DD HH:MM" (empty clears)
    #[arg(long)]
    start: Option<String>,

    /// End of validity, "YYYY-MM-DD HH:MM" (empty clears)
    #[arg(long)]
    end: Option<String>,

    /// Free-text comment
    #[arg(short, long)]
    comment: Option<String>,
}

/// Prints the redirects the backend reports as changed.
struct ConsoleListener {
    display_offset: FixedOffset,
}

impl ConsoleListener {
    fn readable(&self, value: Option<&str>) -> String {
        match value {
            Some(v) => DateTime::parse_from_rfc3339(v)
                .map(|instant| format_readable(&instant, &self.display_offset))
                .unwrap_or_else(|_| v.to_string()),
            None => "-".to_string(),
        }
    }

    fn print_changes(&self, changed: &[Redirect]) {
        if changed.is_empty() {
            return;
        }

        println!();
        println!(
            "  {:<6} {:<50} {:<17} {:<17}",
            "Code".bright_white().bold(),
            "Redirect".bright_white().bold(),
            "Start".bright_white().bold(),
            "End".bright_white().bold()
        );
        println!("  {}", "─".repeat(92).bright_black());

        for redirect in changed {
            println!(
                "  {:<6} {:<50} {:<17} {:<17}",
                redirect.status_code.to_string().cyan(),
                redirect.describe(),
                self.readable(redirect.start_date_time.as_deref())
                    .bright_black(),
                self.readable(redirect.end_date_time.as_deref())
                    .bright_black()
            );
        }
        println!();
    }
}

impl RedirectListener for ConsoleListener {
    fn on_created(&self, changed: &[Redirect]) {
        self.print_changes(changed);
    }

    fn on_updated(&self, changed: &[Redirect], original: &Redirect) {
        println!("  Previously: {}", original.describe().bright_black());
        self.print_changes(changed);
    }

    fn on_cancel(&self) {
        println!("{}", "Cancelled".yellow());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    match cli.command {
        Commands::Create { fields } => {
            let mut form = form(&config, None)?;
            apply_fields(&mut form, &fields);
            submit(&mut form).await?;
        }
        Commands::Update {
            existing,
            fields,
            yes,
        } => {
            let original = existing
                .load()?
                .context("update needs --existing or --existing-file")?;
            let mut form = form(&config, Some(original))?;
            apply_fields(&mut form, &fields);

            if !yes && !confirm_update(&form)? {
                form.cancel();
                return Ok(());
            }
            submit(&mut form).await?;
        }
        Commands::Interactive { existing } => {
            let mut form = form(&config, existing.load()?)?;
            run_interactive(&mut form).await?;
        }
        Commands::View { existing, fields } => {
            let mut form = form(&config, existing.load()?)?;
            apply_fields(&mut form, &fields);
            println!("{}", serde_json::to_string_pretty(&form.view())?);
        }
    }

    Ok(())
}

impl ExistingArgs {
    fn load(&self) -> Result<Option<Redirect>> {
        let json = match (&self.existing, &self.existing_file) {
            (Some(json), _) => json.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Cannot read {}", path.display()))?,
            (None, None) => return Ok(None),
        };

        let redirect = serde_json::from_str(&json).context("Existing redirect is not valid JSON")?;
        Ok(Some(redirect))
    }
}

fn form(config: &Config, existing: Option<Redirect>) -> Result<HttpRedirectForm> {
    let notifier: Arc<dyn Notifier> = if config.log_format == "json" {
        Arc::new(TracingNotifier::new())
    } else {
        Arc::new(ConsoleNotifier::new())
    };
    let listener = Arc::new(ConsoleListener {
        display_offset: config.form_context()?.display_offset,
    });

    build_form(config, notifier, listener, existing)
}

fn apply_fields(form: &mut HttpRedirectForm, fields: &FieldArgs) {
    let text_fields = [
        (TextField::Host, &fields.host),
        (TextField::SourceUriPath, &fields.source),
        (TextField::TargetUriPath, &fields.target),
        (TextField::Comment, &fields.comment),
    ];
    for (field, value) in text_fields {
        if let Some(value) = value {
            form.edit_text(field, value);
        }
    }

    if let Some(status_code) = fields.status_code {
        form.edit_status_code(status_code);
    }

    for (field, value) in [(DateField::Start, &fields.start), (DateField::End, &fields.end)] {
        if let Some(value) = value {
            form.edit_date(field, DateInput::Formatted(value.clone()));
        }
    }
}

/// Submits the draft. The notifier has already reported any failure.
async fn submit(form: &mut HttpRedirectForm) -> Result<()> {
    form.submit().await.map(|_| ()).map_err(anyhow::Error::from)
}

fn confirm_update(form: &HttpRedirectForm) -> Result<bool> {
    let draft = form.draft().to_redirect();
    if let Some(original) = form.original() {
        println!("  From: {}", original.describe().bright_black());
    }
    println!("  To:   {}", draft.describe().cyan());

    Ok(Confirm::new()
        .with_prompt(form.view().submit_label)
        .default(true)
        .interact()?)
}

/// Prompts for every field until the redirect is saved or the operator gives up.
async fn run_interactive(form: &mut HttpRedirectForm) -> Result<()> {
    println!("{}", format!("Redirect ({})", form.mode()).bright_blue().bold());
    println!();

    loop {
        prompt_fields(form)?;

        let view = form.view();
        let proceed = Confirm::new()
            .with_prompt(&view.submit_label)
            .default(true)
            .interact()?;

        if !proceed {
            if view.show_cancel {
                form.cancel();
            } else {
                println!("{}", "Cancelled".yellow());
            }
            return Ok(());
        }

        match form.submit().await {
            Ok(_) => return Ok(()),
            Err(
                e @ (FormError::Configuration(_)
                | FormError::SubmissionInFlight
                | FormError::StaleSubmission),
            ) => return Err(e.into()),
            // Already reported by the notifier.
            Err(_) => {}
        }

        let again = Confirm::new()
            .with_prompt("Edit and try again?")
            .default(true)
            .interact()?;
        if !again {
            return Ok(());
        }
    }
}

fn prompt_fields(form: &mut HttpRedirectForm) -> Result<()> {
    let host = prompt_text(form, TextField::Host, false)?;
    form.edit_text(TextField::Host, &host);

    loop {
        let source = prompt_text(form, TextField::SourceUriPath, true)?;
        if source.trim() == "?" {
            form.toggle_help_message("sourceUriPath");
            if let Some(tooltip) = form.view().help_tooltip {
                println!("  {}", tooltip.caption.bright_black());
                println!("  {}", form.view().source_uri_path_pattern.bright_black());
            }
            form.toggle_help_message("sourceUriPath");
            continue;
        }
        form.edit_text(TextField::SourceUriPath, &source);
        break;
    }

    let view = form.view();
    let labels: Vec<String> = view
        .status_codes
        .iter()
        .map(|option| format!("{} {}", option.code, option.label))
        .collect();
    let selected = view
        .status_codes
        .iter()
        .position(|option| option.selected)
        .unwrap_or(0);
    let choice = Select::new()
        .with_prompt(&view.status_code_label)
        .items(&labels)
        .default(selected)
        .interact()?;
    if let Some(option) = view.status_codes.get(choice) {
        form.edit_status_code(option.code);
    }

    if form.view().target_uri_path.is_some() {
        let target = prompt_text(form, TextField::TargetUriPath, true)?;
        form.edit_text(TextField::TargetUriPath, &target);
    }

    for field in [DateField::Start, DateField::End] {
        let view = form.view();
        let picker = match field {
            DateField::Start => view.start_date_time,
            DateField::End => view.end_date_time,
        };
        let value: String = Input::new()
            .with_prompt(format!("{} ({})", picker.label, picker.placeholder))
            .with_initial_text(picker.value)
            .allow_empty(true)
            .interact_text()?;
        form.edit_date(field, DateInput::Formatted(value));
    }

    let comment = prompt_text(form, TextField::Comment, false)?;
    form.edit_text(TextField::Comment, &comment);

    Ok(())
}

fn prompt_text(form: &HttpRedirectForm, field: TextField, required: bool) -> Result<String> {
    let view = form.view();
    let current = match field {
        TextField::Host => Some(view.host),
        TextField::SourceUriPath => Some(view.source_uri_path),
        TextField::TargetUriPath => view.target_uri_path,
        TextField::Comment => Some(view.comment),
    }
    .context("Field is not shown for this status code")?;

    let prompt = if required {
        format!("{}* ({})", current.label, current.placeholder)
    } else {
        format!("{} ({})", current.label, current.placeholder)
    };

    Ok(Input::new()
        .with_prompt(prompt)
        .with_initial_text(current.value)
        .allow_empty(!required)
        .interact_text()?)
}
