//! Interactive advisor REPL.
//!
//! Owns the [`Session`] for the lifetime of the chat: history and provider
//! selection live here, get cleared on `/reset`, and die with the process.
//! Answers are printed as-is — they are Markdown, including fenced code
//! blocks, and render fine in a terminal.

use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use payshield_gemini::{Gemini, GenerationConfig, Model};
use payshield_rag::{
    Advisor, GeminiEmbeddingProvider, GeminiLlm, Provider, RagConfig, Session,
    format_recommendations, recommend_providers,
};

const BANNER: &str = "\
payshield — your payment-API advisor

Ask anything about setting up payments with Stripe or Adyen. Business
questions (pricing, comparison, positioning) work right away; select a
provider before asking technical integration questions.

Commands:
  /select <stripe|adyen>   commit to a provider
  /recommend <your needs>  keyword-based provider suggestion
  /reset                   clear history and provider selection
  /quit                    exit
";

/// Sampling parameters for the synthesis model. Low temperature keeps
/// answers close to the retrieved documentation.
fn synthesis_config() -> GenerationConfig {
    GenerationConfig {
        temperature: Some(0.1),
        max_output_tokens: Some(2048),
        ..Default::default()
    }
}

pub async fn run(config: RagConfig) -> Result<()> {
    let api_key = crate::api_key()?;

    let embedder = Arc::new(GeminiEmbeddingProvider::new(&api_key)?);
    let classifier = Arc::new(GeminiLlm::new(&api_key, Model::Gemini25FlashLite)?);
    let synthesizer = Arc::new(GeminiLlm::from_client(
        Gemini::with_model(&api_key, Model::Gemini25Pro)?
            .with_generation_config(synthesis_config()),
    ));

    let advisor = Advisor::builder()
        .config(config)
        .embedder(embedder)
        .classifier(classifier)
        .synthesizer(synthesizer)
        .build()?;

    let mut session = Session::new();
    let mut editor = DefaultEditor::new()?;

    println!("{BANNER}");

    loop {
        let line = match editor.readline("payshield> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(input);

        match input {
            "/quit" | "/exit" => break,
            "/help" => {
                println!("{BANNER}");
                continue;
            }
            "/reset" => {
                session.reset();
                println!("Conversation cleared; provider selection reopened.");
                continue;
            }
            _ => {}
        }

        if let Some(rest) = input.strip_prefix("/select") {
            handle_select(&mut session, rest);
            continue;
        }

        if let Some(rest) = input.strip_prefix("/recommend") {
            let recommendations = recommend_providers(rest.trim());
            println!("{}", format_recommendations(&recommendations).trim_start());
            continue;
        }

        match answer_turn(&advisor, &mut session, input).await {
            Ok(answer) => println!("\n{answer}\n"),
            Err(e) => eprintln!("error: {e:#}"),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn handle_select(session: &mut Session, argument: &str) {
    match argument.trim().parse::<Provider>() {
        Ok(provider) => {
            let name = provider.info().name;
            if session.select_provider(provider) {
                println!(
                    "You selected {name}. You can now ask technical questions about \
                     {name} integration."
                );
            } else {
                println!("A provider is already selected; use /reset to choose again.");
            }
        }
        Err(e) => println!("{e}"),
    }
}

/// One full turn: record the query, classify its stage, answer, record the
/// answer. The transcript window is computed after the user turn is
/// appended, so the classifier sees the current query in context.
async fn answer_turn(advisor: &Advisor, session: &mut Session, query: &str) -> Result<String> {
    session.push_user(query);
    let transcript = session.recent_transcript();

    let stage = advisor.detect_stage(query, &transcript).await?;
    let answer = advisor
        .rag_answer(query, session.selected_provider(), &transcript, stage)
        .await?;

    session.push_assistant(answer.clone());
    Ok(answer)
}
