use colored::Colorize;
use stencil::commands::{CmdMessage, CmdResult, MessageLevel};

pub(super) fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Success => format!("✅ {}", message.content).green().to_string(),
        MessageLevel::Warning => format!("⚠️  {}", message.content).yellow().to_string(),
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", format_message(message));
    }
}

pub(super) fn render_json(result: &CmdResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use stencil::model::{ApplyMode, Article, Template};

    fn sample() -> CmdResult {
        CmdResult {
            template: Template {
                name: "footer".to_string(),
                path: PathBuf::from("templates/footer.md"),
            },
            article: Article {
                name: "draft.md".to_string(),
                path: PathBuf::from("articles/draft.md"),
            },
            mode: ApplyMode::Append,
            bytes_written: 12,
            messages: vec![CmdMessage::success("Applied template footer to draft.md")],
        }
    }

    #[test]
    fn test_success_message_has_check_mark() {
        let line = format_message(&CmdMessage::success("done"));
        assert!(line.contains("✅ done"));
    }

    #[test]
    fn test_warning_keeps_content() {
        assert!(format_message(&CmdMessage::warning("careful")).contains("careful"));
    }

    #[test]
    fn test_json_output_shape() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["template"]["name"], "footer");
        assert_eq!(value["article"]["name"], "draft.md");
        assert_eq!(value["mode"], "append");
        assert_eq!(value["bytes_written"], 12);
        assert_eq!(value["messages"][0]["level"], "success");
    }
}
