//! Line-oriented terminal front end for a conversation store.
//!
//! Plain lines are sent as questions; lines starting with `/` are
//! commands. Replies are printed as store events arrive, so several
//! questions can be pending at once. At end of input the pending
//! questions are answered before the session shuts down; `/quit` drops
//! them.

use std::sync::Arc;

use prepbot_chat::{ConversationStore, Feedback, Message, MessageId, StoreEvent};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinSet;
use tracing::{debug, warn};

const HELP: &str = "\
commands:
  <text>          ask a question
  /clear          start over
  /regen <id>     ask the question before message <id> again
  /copy <id>      print the text of message <id>
  /good <id>      mark a reply as helpful
  /bad <id>       mark a reply as not helpful
  /prompts        list quick-start questions
  /p <n>          ask quick-start question <n>
  /open /close /toggle
  /help           show this help
  /quit           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(String),
    Clear,
    Regenerate(MessageId),
    Copy(MessageId),
    Feedback(MessageId, Feedback),
    Prompts,
    QuickPrompt(usize),
    Open,
    Close,
    Toggle,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.starts_with('/') {
        return Some(Command::Send(line.trim_end_matches(['\r', '\n']).to_string()));
    }

    let mut parts = trimmed.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    let unknown = || Command::Unknown(trimmed.to_string());
    let with_id = |build: fn(MessageId) -> Command| {
        arg.and_then(|a| a.parse::<MessageId>().ok())
            .map_or_else(unknown, build)
    };

    let command = match (name, arg) {
        ("/clear", None) => Command::Clear,
        ("/regen", Some(_)) => with_id(Command::Regenerate),
        ("/copy", Some(_)) => with_id(Command::Copy),
        ("/good", Some(_)) => with_id(|id| Command::Feedback(id, Feedback::Helpful)),
        ("/bad", Some(_)) => with_id(|id| Command::Feedback(id, Feedback::NotHelpful)),
        ("/prompts", None) => Command::Prompts,
        ("/p", Some(n)) => match n.parse::<usize>() {
            Ok(n) if n >= 1 => Command::QuickPrompt(n - 1),
            _ => unknown(),
        },
        ("/open", None) => Command::Open,
        ("/close", None) => Command::Close,
        ("/toggle", None) => Command::Toggle,
        ("/help", None) => Command::Help,
        ("/quit" | "/exit", None) => Command::Quit,
        _ => unknown(),
    };
    Some(command)
}

pub fn render_message(message: &Message) -> String {
    let who = match (message.is_bot, message.is_error) {
        (false, _) => "you",
        (true, false) => "bot",
        (true, true) => "bot (error)",
    };
    format!(
        "[#{}] {} {who}: {}",
        message.id,
        message.timestamp.format("%H:%M"),
        message.text
    )
}

/// Text to print for a store event, if any.
pub fn render_event(event: &StoreEvent) -> Option<String> {
    match event {
        StoreEvent::MessageAppended(message) => Some(render_message(message)),
        StoreEvent::Cleared(greeting) => Some(format!(
            "-- conversation cleared --\n{}",
            render_message(greeting)
        )),
        StoreEvent::LoadingChanged(true) => Some("  ...thinking".into()),
        StoreEvent::LoadingChanged(false) => None,
        StoreEvent::VisibilityChanged(open) => Some(if *open {
            "[chat opened]".into()
        } else {
            "[chat closed]".into()
        }),
        StoreEvent::FeedbackRecorded { id, feedback } => {
            let label = match feedback {
                Feedback::Helpful => "helpful",
                Feedback::NotHelpful => "not helpful",
            };
            Some(format!("  #{id} marked {label}"))
        }
        StoreEvent::Shutdown => None,
    }
}

async fn render_events(mut events: broadcast::Receiver<StoreEvent>) {
    loop {
        match events.recv().await {
            Ok(StoreEvent::Shutdown) | Err(RecvError::Closed) => break,
            Ok(event) => {
                if let Some(line) = render_event(&event) {
                    println!("{line}");
                }
            }
            Err(RecvError::Lagged(skipped)) => warn!("renderer skipped {skipped} events"),
        }
    }
}

fn print_prompts(store: &ConversationStore) {
    for (i, prompt) in store.quick_prompts().iter().enumerate() {
        println!("  /p {}  {prompt}", i + 1);
    }
}

/// Apply one command. Requests that wait on the backend are spawned into
/// `pending`. Returns `false` when the user asked to quit.
fn handle(store: &Arc<ConversationStore>, pending: &mut JoinSet<()>, command: Command) -> bool {
    match command {
        Command::Send(text) => {
            let store = Arc::clone(store);
            pending.spawn(async move {
                store.send_message(text).await;
            });
        }
        Command::Regenerate(id) => {
            let store = Arc::clone(store);
            pending.spawn(async move {
                if store.regenerate(id).await.is_none() {
                    println!("  nothing to regenerate for #{id}");
                }
            });
        }
        Command::QuickPrompt(index) => {
            if index >= store.quick_prompts().len() {
                println!("  no quick prompt {}", index + 1);
            } else {
                let store = Arc::clone(store);
                pending.spawn(async move {
                    store.send_quick_prompt(index).await;
                });
            }
        }
        Command::Copy(id) => match store.copy_text(id) {
            Some(text) => println!("{text}"),
            None => println!("  no message #{id}"),
        },
        Command::Feedback(id, feedback) => {
            if let Err(e) = store.set_feedback(id, feedback) {
                println!("  {e}");
            }
        }
        Command::Clear => store.clear_chat(),
        Command::Prompts => print_prompts(store),
        Command::Open => store.open(),
        Command::Close => store.close(),
        Command::Toggle => {
            store.toggle_open();
        }
        Command::Help => println!("{HELP}"),
        Command::Unknown(input) => println!("  unknown command: {input} (try /help)"),
        Command::Quit => return false,
    }
    true
}

/// Run the prompt loop on stdin until `/quit` or end of input, then shut
/// the session down.
pub async fn run(store: Arc<ConversationStore>) -> std::io::Result<()> {
    let renderer = tokio::spawn(render_events(store.subscribe()));

    store.open();
    for message in store.messages() {
        println!("{}", render_message(&message));
    }
    if !store.quick_prompts().is_empty() {
        println!("Try one of these to get started:");
        print_prompts(&store);
    }
    println!("(type /help for commands)");

    read_commands(&store, BufReader::new(tokio::io::stdin())).await?;

    store.shutdown();
    if let Err(e) = renderer.await {
        warn!("renderer task failed: {e}");
    }
    Ok(())
}

/// Apply commands from `input` until `/quit` or end of input.
///
/// On end of input, waits for every request still in flight. On `/quit`
/// the in-flight requests are aborted.
async fn read_commands<R>(store: &Arc<ConversationStore>, input: R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut pending = JoinSet::new();
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        while pending.try_join_next().is_some() {}
        let Some(command) = parse_command(&line) else {
            continue;
        };
        if !handle(store, &mut pending, command) {
            debug!(aborted = pending.len(), "quit requested");
            return Ok(());
        }
    }

    if !pending.is_empty() {
        debug!(pending = pending.len(), "end of input, waiting for replies");
    }
    while let Some(result) = pending.join_next().await {
        if let Err(e) = result {
            warn!("request task failed: {e}");
        }
    }
    Ok(())
}
