//! Command-line front for the signup form client.
//!
//! Collects the form fields from flags, runs the same local validation and
//! submission flow as the web form, and prints the confirmation or the
//! user-visible error message.

use clap::Parser;
use prelaunch::form::{Field, FormController, INDUSTRY_OPTIONS};

#[derive(Parser, Debug)]
#[command(
    name = "signup_form",
    about = "Submit a prelaunch signup from the command line"
)]
struct Args {
    /// Signup endpoint URL
    #[arg(long, default_value = "http://127.0.0.1:8080/api/signup")]
    endpoint: String,
    /// Full name
    #[arg(long, default_value = "")]
    name: String,
    /// Contact email
    #[arg(long, default_value = "")]
    email: String,
    /// Phone number (include country code if possible)
    #[arg(long, default_value = "")]
    phone: String,
    /// Company or organisation name
    #[arg(long, default_value = "")]
    organisation: String,
    /// Industry sector; pass "Other" together with --industry-other
    #[arg(long, default_value = "")]
    industry: String,
    /// Free-text industry when --industry is "Other"
    #[arg(long, default_value = "")]
    industry_other: String,
    /// Job title
    #[arg(long, default_value = "")]
    job_title: String,
    /// Why you're interested (optional)
    #[arg(long, default_value = "")]
    interest: String,
    /// Agree to the privacy policy (required)
    #[arg(long)]
    agree: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // The consent checkbox is mandatory on the form surface
    if !args.agree {
        anyhow::bail!("You must agree to the privacy policy; pass --agree");
    }

    // The web form offers a fixed selector; mirror it here
    if !args.industry.is_empty() && !INDUSTRY_OPTIONS.contains(&args.industry.as_str()) {
        anyhow::bail!(
            "Unknown industry '{}'; choose one of: {}",
            args.industry,
            INDUSTRY_OPTIONS.join(", ")
        );
    }

    let mut controller = FormController::new(args.endpoint);
    controller.form.set(Field::Name, &args.name);
    controller.form.set(Field::Email, &args.email);
    controller.form.set(Field::Phone, &args.phone);
    controller.form.set(Field::Organisation, &args.organisation);
    // Industry before its override: changing the selector clears the override
    controller.form.set(Field::Industry, &args.industry);
    controller.form.set(Field::IndustryOther, &args.industry_other);
    controller.form.set(Field::JobTitle, &args.job_title);
    controller.form.set(Field::Interest, &args.interest);
    controller.form.set_agree(args.agree);

    if controller.submit().await {
        println!("You're on the waiting list! We'll send product updates once we launch.");
        Ok(())
    } else {
        let message = controller
            .error()
            .unwrap_or("Something went wrong. Please try again.")
            .to_string();
        anyhow::bail!("{message}")
    }
}
