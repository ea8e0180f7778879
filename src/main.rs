use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use smartinbox::analysis::{Analyzer, KeywordTables};
use smartinbox::config::Config;
use smartinbox::email::{EmailSource, GmailSource, JsonFileSource, TriageProcessor};

#[derive(Parser)]
#[command(name = "smartinbox")]
#[command(about = "Ranks and annotates your recent emails by priority")]
#[command(version = "0.1.0")]
struct Args {
    /// Fenêtre de récupération en heures (par défaut: FETCH_HOURS ou 24)
    #[arg(long)]
    hours: Option<u32>,

    /// Limite du nombre d'emails à analyser (par défaut: illimité)
    #[arg(short = 'l', long)]
    limit: Option<usize>,

    /// Analyse un fichier JSON d'emails au lieu d'interroger Gmail
    #[arg(short = 'i', long)]
    input: Option<String>,

    /// Affiche le rapport au format JSON
    #[arg(long)]
    json: bool,

    /// Vérifier la configuration sans se connecter
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Charger le fichier .env s'il existe
    dotenv::dotenv().ok();

    let args = Args::parse();

    env_logger::init();

    info!("🚀 Démarrage de SmartInbox");

    let mut config = Config::new()?;

    if let Some(hours) = args.hours {
        config.fetch.hours = hours;
    }

    if args.check_config {
        println!("✅ Configuration valide !");
        match &config.gmail {
            Some(gmail) => {
                println!("📧 Gmail API OAuth2");
                println!("🔑 Credentials: {}", gmail.credentials_path);
                println!("💾 Token cache: {}", gmail.token_cache_path);
            }
            None => println!("📧 Gmail non configuré (GMAIL_CREDENTIALS_PATH)"),
        }
        println!("🕐 Fenêtre: {} heure(s), {} email(s) max", config.fetch.hours, config.fetch.max_results);
        println!("📄 Corps tronqué à {} caractères", config.fetch.body_max_chars);
        if let Some(path) = &config.keywords_path {
            println!("🔤 Mots-clés: {}", path);
        }
        return Ok(());
    }

    let keywords = match &config.keywords_path {
        Some(path) => KeywordTables::from_json_file(path)?,
        None => KeywordTables::default(),
    };
    let analyzer = Analyzer::with_keywords(keywords)
        .context("Impossible d'initialiser l'analyseur")?;

    let result = match &args.input {
        Some(path) => run(analyzer, JsonFileSource::new(path), &args).await,
        None => {
            let gmail = config.require_gmail()?.clone();
            run(analyzer, GmailSource::new(gmail, config.fetch.clone()), &args).await
        }
    };

    if let Err(e) = &result {
        error!("❌ Erreur lors de l'analyse des emails: {:#}", e);
    }

    result
}

async fn run<S: EmailSource>(analyzer: Analyzer, source: S, args: &Args) -> Result<()> {
    let processor = TriageProcessor::new(analyzer, source);
    let report = processor.run(args.limit).await?;

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }

    info!("✅ Analyse terminée avec succès. {} emails analysés.", report.total_emails);

    Ok(())
}
