use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use signup::core::date::{calendar_day, parse_iso_date};
use signup::{
    AllowedStartDates, CourseCatalog, FieldChange, SignupConfig, SignupForm, SubmitOutcome,
    ValidationErrors,
};

#[derive(Parser)]
#[command(name = "signup")]
#[command(about = "Register for a course: pick a course, subject and start date")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Simulated server latency for submissions, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 1500, global = true)]
    submit_delay_ms: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the registration window
    #[cfg(feature = "gui")]
    Gui,
    /// List courses, their subjects and the allowed start dates
    Courses,
    /// Validate a registration without submitting it
    Check {
        #[command(flatten)]
        registration: Registration,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate and submit a registration
    Submit {
        #[command(flatten)]
        registration: Registration,
    },
}

#[derive(Args)]
struct Registration {
    /// Course id (see `courses`)
    #[arg(long, default_value = "")]
    course: String,

    /// Subject offered by the course
    #[arg(long, default_value = "")]
    subject: String,

    /// Start date as YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    start_date: Option<String>,

    /// Additional note (20 to 500 characters)
    #[arg(long, default_value = "")]
    note: String,
}

impl Registration {
    fn fill(self, form: &mut SignupForm) -> anyhow::Result<()> {
        form.set_field(FieldChange::Course(self.course));
        form.set_field(FieldChange::Subject(self.subject));
        if let Some(start_date) = self.start_date {
            form.set_start_date(parse_iso_date(&start_date)?);
        }
        form.set_field(FieldChange::Note(self.note));
        Ok(())
    }
}

#[derive(Serialize)]
struct CheckReport<'a> {
    valid: bool,
    errors: &'a ValidationErrors,
}

fn print_errors(errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        println!("  {}: {}", field, message);
    }
}

fn list_courses() -> anyhow::Result<()> {
    let catalog = CourseCatalog::default();
    println!("=== Courses ===");
    for course in catalog.iter() {
        println!("{} ({})", course.label, course.id);
        for subject in course.subjects {
            println!("  - {}", subject);
        }
    }

    println!("\n=== Start dates ===");
    for date in AllowedStartDates::default().dates()? {
        println!("  {} ({})", calendar_day(date)?, date);
    }
    Ok(())
}

fn check(config: SignupConfig, registration: Registration, json: bool) -> anyhow::Result<bool> {
    let mut form = SignupForm::with_config(config);
    registration.fill(&mut form)?;
    let valid = form.validate();

    if json {
        let report = CheckReport {
            valid,
            errors: form.errors(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if valid {
        println!("Registration is valid.");
    } else {
        println!("Registration is invalid:");
        print_errors(form.errors());
    }
    Ok(valid)
}

async fn submit(config: SignupConfig, registration: Registration) -> anyhow::Result<bool> {
    let mut form = SignupForm::with_config(config);
    registration.fill(&mut form)?;

    match form.submit() {
        SubmitOutcome::Started(pending) => {
            println!("Submitting...");
            let finished = pending.wait().await;
            form.finish_submission(finished);
            if form.is_success_dialog_open() {
                println!("Success! Your course has been successfully registered.");
                form.acknowledge();
                Ok(true)
            } else {
                println!("Submission cancelled.");
                Ok(false)
            }
        }
        SubmitOutcome::Invalid => {
            println!("Registration is invalid:");
            print_errors(form.errors());
            Ok(false)
        }
        SubmitOutcome::AlreadySubmitting => Ok(false),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    signup::logging::init(args.verbose);

    let config = SignupConfig::default().with_submit_delay_ms(args.submit_delay_ms);

    let ok = match args.command {
        #[cfg(feature = "gui")]
        None | Some(Command::Gui) => {
            signup::gui::run(config)?;
            true
        }
        #[cfg(not(feature = "gui"))]
        None => {
            list_courses()?;
            true
        }
        Some(Command::Courses) => {
            list_courses()?;
            true
        }
        Some(Command::Check { registration, json }) => check(config, registration, json)?,
        Some(Command::Submit { registration }) => {
            let runtime = tokio::runtime::Runtime::new()
                .context("Failed to start the async runtime")?;
            runtime.block_on(submit(config, registration))?
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
