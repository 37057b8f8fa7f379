use clap::{Args, Parser, Subcommand};
use drank_core::config::DisplayConfig;
use drank_core::input::{parse_field, parse_height, parse_non_negative, parse_weight};
use drank_core::legislation::{self, JURISDICTION};
use drank_core::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "drankcalc")]
#[command(about = "BMI and blood alcohol estimator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate both BMI and estimated BAC
    Calc {
        #[command(flatten)]
        body: BodyArgs,

        /// Height in centimetres
        #[arg(long, allow_hyphen_values = true)]
        height: Option<String>,

        /// Age in years
        #[arg(long, allow_hyphen_values = true)]
        age: Option<String>,

        #[command(flatten)]
        drinks: DrinkArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Calculate BMI only
    Bmi {
        /// Weight in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: Option<String>,

        /// Height in centimetres
        #[arg(long, allow_hyphen_values = true)]
        height: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate BAC only
    Bac {
        #[command(flatten)]
        body: BodyArgs,

        #[command(flatten)]
        drinks: DrinkArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fill in the calculation form interactively (default)
    Form,

    /// Show the drink-driving legislation reference
    Law,

    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct BodyArgs {
    /// Weight in kilograms
    #[arg(long, allow_hyphen_values = true)]
    weight: Option<String>,

    /// Sex (male, female)
    #[arg(long)]
    sex: Option<Sex>,
}

#[derive(Args)]
struct DrinkArgs {
    /// Drink type (beer, wine, whiskey, vodka, rum, gin)
    #[arg(long)]
    drink: Option<DrinkType>,

    /// Number of drinks
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    count: String,

    /// Custom alcohol percentage; ignored unless above 0 and at most 100
    #[arg(long, allow_hyphen_values = true)]
    abv: Option<String>,

    /// Hours since the last drink
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    hours: String,

    /// Driver class for the legal limit (general, professional, novice)
    #[arg(long)]
    driver: Option<DriverClass>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    drank_core::logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Calc {
            body,
            height,
            age,
            drinks,
            json,
        }) => cmd_calc(body, height, age, drinks, json, &load_config(cli.config.as_deref())?),
        Some(Commands::Bmi {
            weight,
            height,
            json,
        }) => cmd_bmi(weight, height, json, &load_config(cli.config.as_deref())?),
        Some(Commands::Bac { body, drinks, json }) => {
            cmd_bac(body, drinks, json, &load_config(cli.config.as_deref())?)
        }
        Some(Commands::Form) | None => cmd_form(&load_config(cli.config.as_deref())?),
        // Config-free commands
        Some(Commands::Law) => cmd_law(),
        Some(Commands::InitConfig { force }) => {
            let path = cli.config.unwrap_or_else(Config::default_config_path);
            cmd_init_config(path, force)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_or_default(path)?,
        None => Config::load()?,
    };
    tracing::debug!("Using config: {:?}", config);
    Ok(config)
}

fn cmd_calc(
    body: BodyArgs,
    height: Option<String>,
    age: Option<String>,
    drinks: DrinkArgs,
    json: bool,
    config: &Config,
) -> Result<()> {
    let form = FormInput {
        weight: required(body.weight, config.profile.weight_kg, "weight", "profile.weight_kg")?,
        height: required(height, config.profile.height_cm, "height", "profile.height_cm")?,
        age: required(age, config.profile.age, "age", "profile.age")?,
        sex: body.sex.unwrap_or(config.profile.sex),
        drink: drinks.drink.unwrap_or(config.drink.default_type),
        drink_count: drinks.count,
        custom_abv: drinks.abv.unwrap_or_default(),
        hours_since_last_drink: drinks.hours,
    };

    let input = form.parse()?;
    let result = calculate(&input);
    let assessment = result.assess(drinks.driver.unwrap_or(config.limits.driver_class));

    if json {
        let report = serde_json::json!({
            "input": input,
            "bmi": result.bmi,
            "bmi_category": result.bmi_category(),
            "bac": result.bac,
            "limit": assessment,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_bmi(result.bmi, &config.display);
        display_bac(result.bac, &assessment, &config.display);
    }

    Ok(())
}

fn cmd_bmi(
    weight: Option<String>,
    height: Option<String>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let weight = required(weight, config.profile.weight_kg, "weight", "profile.weight_kg")?;
    let height = required(height, config.profile.height_cm, "height", "profile.height_cm")?;

    let bmi = calculate_bmi(
        parse_weight(&weight)?,
        parse_height(&height)?,
    );

    if json {
        let report = serde_json::json!({
            "bmi": bmi,
            "bmi_category": BmiCategory::from_bmi(bmi),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_bmi(bmi, &config.display);
    }

    Ok(())
}

fn cmd_bac(body: BodyArgs, drinks: DrinkArgs, json: bool, config: &Config) -> Result<()> {
    let weight = required(body.weight, config.profile.weight_kg, "weight", "profile.weight_kg")?;

    let bac = estimate_bac(
        parse_weight(&weight)?,
        body.sex.unwrap_or(config.profile.sex),
        parse_field("drink count", &drinks.count)?,
        drinks.drink.unwrap_or(config.drink.default_type),
        drinks.abv.as_deref().and_then(parse_custom_abv),
        parse_non_negative("hours since last drink", &drinks.hours)?,
    );
    let assessment = assess(bac, drinks.driver.unwrap_or(config.limits.driver_class));

    if json {
        let report = serde_json::json!({
            "bac": bac,
            "limit": assessment,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_bac(bac, &assessment, &config.display);
    }

    Ok(())
}

fn cmd_form(config: &Config) -> Result<()> {
    println!("── Your details ─────────────────────────");
    let weight = prompt("Weight (kg)", config.profile.weight_kg.map(|w| w.to_string()))?;
    let height = prompt("Height (cm)", config.profile.height_cm.map(|h| h.to_string()))?;
    let age = prompt("Age", config.profile.age.map(|a| a.to_string()))?;
    let sex = prompt("Sex (male/female)", Some(config.profile.sex.to_string()))?;

    println!("── Drinks ───────────────────────────────");
    let drink = prompt(
        "Drink type (beer/wine/whiskey/vodka/rum/gin)",
        Some(config.drink.default_type.to_string()),
    )?;
    let drink_count = prompt("Number of drinks", None)?;
    let custom_abv = prompt("Alcohol percentage (optional)", None)?;
    let hours = prompt("Hours since last drink", None)?;

    let parsed = sex.parse::<Sex>().and_then(|sex| {
        let drink = drink.parse::<DrinkType>()?;
        FormInput {
            weight,
            height,
            age,
            sex,
            drink,
            drink_count,
            custom_abv,
            hours_since_last_drink: hours,
        }
        .parse()
    });

    // Like the form it replaces: a bad field means no calculation
    let input = match parsed {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Could not calculate: {}", e);
            return Ok(());
        }
    };

    let result = calculate(&input);
    let assessment = result.assess(config.limits.driver_class);

    println!();
    display_bmi(result.bmi, &config.display);
    display_bac(result.bac, &assessment, &config.display);
    println!();
    println!("  ℹ Run `drankcalc law` to read the {} legislation.", JURISDICTION);

    Ok(())
}

fn cmd_law() -> Result<()> {
    print!("{}", legislation::reference_text());
    Ok(())
}

fn cmd_init_config(path: PathBuf, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Other(format!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(&path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}

/// Take the command-line value, else the configured profile value
fn required<T: ToString>(
    arg: Option<String>,
    configured: Option<T>,
    field: &str,
    config_key: &str,
) -> Result<String> {
    arg.or_else(|| configured.map(|v| v.to_string()))
        .ok_or_else(|| {
            Error::Other(format!(
                "No {} given: pass --{} or set {} in the config file",
                field, field, config_key
            ))
        })
}

fn display_bmi(bmi: f64, display: &DisplayConfig) {
    println!("Your BMI is: {:.*}", display.bmi_precision, bmi);
    println!("  Category: {}", BmiCategory::from_bmi(bmi));
}

fn display_bac(bac: f64, assessment: &LimitAssessment, display: &DisplayConfig) {
    println!("Your estimated BAC is: {:.*} ‰", display.bac_precision, bac);

    if assessment.over_limit {
        println!(
            "⚠ You are above the legal driving limit in {} ({}‰ for {} drivers).",
            JURISDICTION, assessment.limit, assessment.driver_class
        );
    }
}

fn prompt(label: &str, default: Option<String>) -> Result<String> {
    match &default {
        Some(value) => print!("{} [{}]: ", label, value),
        None => print!("{}: ", label),
    }
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let answer = input.trim();
    if answer.is_empty() {
        Ok(default.unwrap_or_default())
    } else {
        Ok(answer.to_string())
    }
}
