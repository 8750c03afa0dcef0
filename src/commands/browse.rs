// Browse command: interactive search session over one loaded feed

use crate::browser::Browser;
use crate::commands;
use crate::config::Settings;
use crate::engine::{FilterCriteria, SortDirection, SortField};
use crate::feed::LoadState;
use crate::render::terminal;
use crate::ui;
use clap::ValueEnum;

const HELP: &str = "\
Type text to search version numbers (empty line clears the search).
  :platform <key>    only versions offering <key> (no key clears)
  :sort version|date
  :order asc|desc
  :reset             restore default criteria
  :help
  :quit";

/// What one line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Criteria(FilterCriteria),
    Help,
    Quit,
    Invalid(String),
}

/// Turn a line into a complete replacement for the current criteria
pub fn parse_input(line: &str, current: &FilterCriteria, defaults: &FilterCriteria) -> Input {
    let line = line.trim();

    let Some(command) = line.strip_prefix(':') else {
        return Input::Criteria(FilterCriteria {
            query: line.to_string(),
            ..current.clone()
        });
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or("");
    let arg = parts.next();

    match (name, arg) {
        ("q" | "quit" | "exit", _) => Input::Quit,
        ("h" | "help", _) => Input::Help,
        ("reset", _) => Input::Criteria(defaults.clone()),
        ("platform" | "p", key) => Input::Criteria(FilterCriteria {
            platform: key.map(str::to_string),
            ..current.clone()
        }),
        ("sort" | "s", Some(value)) => match SortField::from_str(value, true) {
            Ok(sort_field) => Input::Criteria(FilterCriteria {
                sort_field,
                ..current.clone()
            }),
            Err(_) => Input::Invalid(format!("Unknown sort field '{}'", value)),
        },
        ("order" | "o", Some(value)) => match SortDirection::from_str(value, true) {
            Ok(sort_direction) => Input::Criteria(FilterCriteria {
                sort_direction,
                ..current.clone()
            }),
            Err(_) => Input::Invalid(format!("Unknown order '{}'", value)),
        },
        _ => Input::Invalid(format!("Unknown command ':{}'", command)),
    }
}

pub async fn browse(settings: &Settings) -> anyhow::Result<i32> {
    let defaults = FilterCriteria {
        sort_field: settings.default_sort,
        sort_direction: settings.default_order,
        ..Default::default()
    };

    let mut browser = Browser::new(LoadState::Loading);
    browser.set_criteria(defaults.clone());
    browser.finish_loading(commands::load_feed(settings).await);
    let code = commands::exit_code(browser.state());

    ui::block(&terminal::render_view(&browser.view()));
    if code != 0 {
        return Ok(code);
    }
    ui::dim("Type :help for commands");

    while let Some(line) = ui::prompt("search>") {
        match parse_input(&line, browser.criteria(), &defaults) {
            Input::Quit => break,
            Input::Help => ui::dim(HELP),
            Input::Invalid(message) => ui::error(&message),
            Input::Criteria(criteria) => {
                browser.set_criteria(criteria);
                ui::block(&terminal::render_view(&browser.view()));
            }
        }
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> FilterCriteria {
        FilterCriteria {
            query: "1.2".to_string(),
            platform: Some("linux-x64".to_string()),
            sort_field: SortField::Version,
            sort_direction: SortDirection::Descending,
        }
    }

    #[test]
    fn test_plain_text_replaces_query_only() {
        let input = parse_input("  0.49 ", &current(), &FilterCriteria::default());
        assert_eq!(
            input,
            Input::Criteria(FilterCriteria {
                query: "0.49".to_string(),
                ..current()
            })
        );
    }

    #[test]
    fn test_empty_line_clears_query() {
        match parse_input("", &current(), &FilterCriteria::default()) {
            Input::Criteria(c) => {
                assert_eq!(c.query, "");
                assert_eq!(c.platform.as_deref(), Some("linux-x64"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_platform_set_and_clear() {
        match parse_input(":platform darwin-arm64", &current(), &FilterCriteria::default()) {
            Input::Criteria(c) => assert_eq!(c.platform.as_deref(), Some("darwin-arm64")),
            other => panic!("unexpected {:?}", other),
        }
        match parse_input(":platform", &current(), &FilterCriteria::default()) {
            Input::Criteria(c) => assert_eq!(c.platform, None),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_sort_and_order() {
        match parse_input(":sort DATE", &current(), &FilterCriteria::default()) {
            Input::Criteria(c) => assert_eq!(c.sort_field, SortField::Date),
            other => panic!("unexpected {:?}", other),
        }
        match parse_input(":order asc", &current(), &FilterCriteria::default()) {
            Input::Criteria(c) => assert_eq!(c.sort_direction, SortDirection::Ascending),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            parse_input(":sort size", &current(), &FilterCriteria::default()),
            Input::Invalid(_)
        ));
        assert!(matches!(
            parse_input(":order", &current(), &FilterCriteria::default()),
            Input::Invalid(_)
        ));
    }

    #[test]
    fn test_reset_quit_help() {
        let defaults = FilterCriteria {
            sort_field: SortField::Date,
            ..Default::default()
        };
        assert_eq!(
            parse_input(":reset", &current(), &defaults),
            Input::Criteria(defaults.clone())
        );
        assert_eq!(parse_input(":q", &current(), &defaults), Input::Quit);
        assert_eq!(parse_input(":help", &current(), &defaults), Input::Help);
        assert!(matches!(
            parse_input(":frobnicate", &current(), &defaults),
            Input::Invalid(_)
        ));
    }
}
