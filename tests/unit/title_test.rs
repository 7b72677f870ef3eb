//! Tests for title composition

use todobar::config::{DEFAULT_TITLE, DEFAULT_TITLE_COLOR};
use todobar::title::{Title, TitleConfig, compose_title, default_title, render_title};

fn config(title: &str, color: &str) -> TitleConfig {
    TitleConfig {
        title: title.to_string(),
        title_color: color.to_string(),
        empty_title: None,
        empty_title_color: None,
    }
}

// =============================================================================
// RENDERING
// =============================================================================

#[test]
fn test_default_title() {
    assert_eq!(default_title(0), "Pending tasks: 0\n");
    assert_eq!(default_title(12), "Pending tasks: 12\n");
}

#[test]
fn test_render_num_tasks() {
    assert_eq!(render_title("{{NumTasks}}", 3).unwrap(), "3");
}

#[test]
fn test_render_go_style_num_tasks() {
    assert_eq!(render_title("{{.NumTasks}}", 0).unwrap(), "0");
    assert_eq!(render_title("{{ .NumTasks }} left", 4).unwrap(), "4 left");
}

#[test]
fn test_go_style_threshold_template() {
    let template = ":{{ if (le .NumTasks 50) }}{{ .NumTasks }}{{ else }}ellipsis{{ end }}.circle.fill:";
    assert_eq!(render_title(template, 50).unwrap(), ":50.circle.fill:");
    assert_eq!(render_title(template, 51).unwrap(), ":ellipsis.circle.fill:");
}

#[test]
fn test_default_template_threshold() {
    assert_eq!(render_title(DEFAULT_TITLE, 7).unwrap(), ":7.circle.fill:");
    assert_eq!(render_title(DEFAULT_TITLE, 50).unwrap(), ":50.circle.fill:");
    assert_eq!(render_title(DEFAULT_TITLE, 51).unwrap(), ":ellipsis.circle.fill:");
}

#[test]
fn test_render_errors() {
    assert!(render_title("{{#if NumTasks}}open", 1).is_err());
    assert!(render_title("{{Missing}}", 1).is_err());
}

#[test]
fn test_no_html_escaping() {
    assert_eq!(render_title("<{{NumTasks}}> & more", 2).unwrap(), "<2> & more");
}

// =============================================================================
// COMPOSITION
// =============================================================================

#[test]
fn test_compose_normal_state() {
    let title = compose_title(4, &config("{{NumTasks}} left", "#DC143C"));
    assert_eq!(
        title,
        Title {
            text: "4 left".to_string(),
            color: Some("#DC143C".to_string())
        }
    );
}

#[test]
fn test_compose_with_defaults() {
    let title = compose_title(2, &config(DEFAULT_TITLE, DEFAULT_TITLE_COLOR));
    assert_eq!(title.text, ":2.circle.fill:");
    assert_eq!(title.color.as_deref(), Some("#DC143C"));
}

#[test]
fn test_empty_color_means_no_color() {
    assert_eq!(compose_title(1, &config("{{NumTasks}}", "")).color, None);
}

#[test]
fn test_invalid_template_falls_back() {
    let title = compose_title(5, &config("{{#if}}", "#123456"));
    assert_eq!(title.text, "Pending tasks: 5\n");
    assert_eq!(title.color.as_deref(), Some("#123456"));
}

#[test]
fn test_missing_field_falls_back() {
    let title = compose_title(5, &config("{{NumberOfTasks}}", ""));
    assert_eq!(title.text, "Pending tasks: 5\n");
}

#[test]
fn test_empty_template_falls_back() {
    let title = compose_title(1, &config("", ""));
    assert_eq!(title.text, "Pending tasks: 1\n");
}

#[test]
fn test_empty_state_uses_empty_set() {
    let cfg = TitleConfig {
        empty_title: Some("all done".to_string()),
        empty_title_color: Some("#00FF00".to_string()),
        ..config("{{NumTasks}}", "#DC143C")
    };

    let empty = compose_title(0, &cfg);
    assert_eq!(empty.text, "all done");
    assert_eq!(empty.color.as_deref(), Some("#00FF00"));

    let busy = compose_title(1, &cfg);
    assert_eq!(busy.text, "1");
    assert_eq!(busy.color.as_deref(), Some("#DC143C"));
}

#[test]
fn test_empty_state_with_go_style_template() {
    let title = compose_title(0, &config("{{.NumTasks}}", ""));
    assert_eq!(
        title,
        Title {
            text: "0".to_string(),
            color: None
        }
    );
}

#[test]
fn test_empty_state_without_overrides_uses_normal_set() {
    let title = compose_title(0, &config("{{NumTasks}}", ""));
    assert_eq!(title.text, "0");
    assert_eq!(title.color, None);
}

#[test]
fn test_empty_template_and_color_fall_back_independently() {
    // Only the color is overridden
    let cfg = TitleConfig {
        empty_title_color: Some("#00FF00".to_string()),
        ..config("{{NumTasks}} tasks", "#DC143C")
    };
    let title = compose_title(0, &cfg);
    assert_eq!(title.text, "0 tasks");
    assert_eq!(title.color.as_deref(), Some("#00FF00"));

    // Only the template is overridden
    let cfg = TitleConfig {
        empty_title: Some("nothing".to_string()),
        ..config("{{NumTasks}} tasks", "#DC143C")
    };
    let title = compose_title(0, &cfg);
    assert_eq!(title.text, "nothing");
    assert_eq!(title.color.as_deref(), Some("#DC143C"));
}

#[test]
fn test_explicitly_empty_empty_state_color_disables_color() {
    let cfg = TitleConfig {
        empty_title_color: Some(String::new()),
        ..config("{{NumTasks}}", "#DC143C")
    };
    assert_eq!(compose_title(0, &cfg).color, None);
}

#[test]
fn test_empty_empty_state_template_uses_normal_template() {
    let cfg = TitleConfig {
        empty_title: Some(String::new()),
        ..config("{{NumTasks}}", "")
    };
    assert_eq!(compose_title(0, &cfg).text, "0");
}
