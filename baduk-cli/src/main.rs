//! Play baduk against the heuristic opponent in a terminal.
//!
//! Settings come from the environment: `BADUK_DIFFICULTY` (0 plays at
//! random, up to 16 and beyond for the strongest band), `BADUK_THINK_MS`,
//! `BADUK_HUMAN` (`b` or `w`) and `BADUK_OPPONENT`. Logging follows
//! `RUST_LOG`.

mod config;
mod error;
mod input;
mod render;

use baduk_engine::{Engine, GoError, Reply, SinglePlayer, Stage};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{Command, HELP};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "baduk_cli=info,baduk_engine=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let config = CliConfig::from_env()?;
    tracing::info!(
        difficulty = config.session.difficulty.0,
        human = %config.session.human,
        opponent = %config.opponent,
        "starting game"
    );

    let mut game = SinglePlayer::new(config.session);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    say(&mut stdout, &format!("{HELP}\n\n{}", render::board(game.engine()))).await?;

    let mut announced = false;
    loop {
        if let Some(reply) = game.respond().await {
            let text = match reply {
                Reply::Played { point, captured } => format!(
                    "{} plays {} {}{}",
                    config.opponent,
                    point.0,
                    point.1,
                    captures_suffix(captured.len()),
                ),
                Reply::Passed => format!("{} passes", config.opponent),
            };
            say(&mut stdout, &format!("{text}\n{}", render::board(game.engine()))).await?;
        }

        if game.is_over() && !announced {
            announced = true;
            finish(&mut stdout, game.engine(), &config).await?;
            if let Some(record) = game.record(&config.opponent) {
                say(&mut stdout, &serde_json::to_string(&record)?).await?;
            }
            say(&mut stdout, "type `restart` for a new game or `quit` to leave").await?;
        }

        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match input::parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                say(&mut stdout, &msg).await?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => say(&mut stdout, HELP).await?,
            Command::Board => {
                let engine = game.engine();
                let text = format!("{}{}", render::board(engine), render::status(engine));
                say(&mut stdout, &text).await?;
            }
            Command::Restart => {
                game.restart();
                announced = false;
                tracing::info!("new game");
                say(&mut stdout, &render::board(game.engine())).await?;
            }
            Command::Pass => match game.pass_human() {
                Ok(Stage::Over) => {}
                Ok(Stage::InProgress) => say(&mut stdout, "you pass").await?,
                Err(e) => say(&mut stdout, &rejection(e)).await?,
            },
            Command::Play(point) => match game.play_human(point) {
                Ok(captured) => {
                    let text = format!(
                        "you play {} {}{}\n{}",
                        point.0,
                        point.1,
                        captures_suffix(captured.len()),
                        render::board(game.engine()),
                    );
                    say(&mut stdout, &text).await?;
                }
                Err(e) => say(&mut stdout, &rejection(e)).await?,
            },
        }
    }

    Ok(())
}

async fn finish(
    stdout: &mut tokio::io::Stdout,
    engine: &Engine,
    config: &CliConfig,
) -> Result<(), CliError> {
    let score = engine.calculate_score();
    let verdict = if score.winner == config.session.human {
        "you win"
    } else {
        "you lose"
    };
    let text = format!(
        "game over: black {:.1}, white {:.1} ({} by {:.1}), {verdict}",
        score.black,
        score.white,
        score.winner,
        score.margin(),
    );
    say(stdout, &text).await
}

async fn say(stdout: &mut tokio::io::Stdout, text: &str) -> Result<(), CliError> {
    stdout.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}

fn captures_suffix(n: usize) -> String {
    match n {
        0 => String::new(),
        1 => ", capturing 1 stone".to_string(),
        n => format!(", capturing {n} stones"),
    }
}

fn rejection(e: GoError) -> String {
    match e {
        GoError::GameOver => "the game is over".to_string(),
        GoError::OutOfTurn => "wait for your turn".to_string(),
        e => format!("illegal move: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_wording() {
        assert_eq!(captures_suffix(0), "");
        assert_eq!(captures_suffix(1), ", capturing 1 stone");
        assert_eq!(captures_suffix(3), ", capturing 3 stones");
    }

    #[test]
    fn rejection_wording() {
        assert_eq!(rejection(GoError::OutOfTurn), "wait for your turn");
        assert!(rejection(GoError::KoViolation).starts_with("illegal move: "));
    }
}
