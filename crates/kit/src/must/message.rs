use std::fmt::Display;
use std::iter;

/// The optional message attached to a must-call.
///
/// | variant                         | rendered as                            |
/// |---------------------------------|----------------------------------------|
/// | `None`                          | `error`                                |
/// | `Text(text)`                    | `text: error`                          |
/// | `Format { template, args }`     | `template` filled with `args..., error` |
///
/// A `Format` without arguments is rendered like `Text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Message {
    #[default]
    None,
    Text(String),
    Format { template: String, args: Vec<String> },
}

impl Message {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    /// Builds a template message; `args` are rendered with [`Display`] right away.
    pub fn format<S, I>(template: S, args: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator,
        I::Item: Display,
    {
        Self::Format { template: template.into(), args: args.into_iter().map(|arg| arg.to_string()).collect() }
    }

    /// Returns the template and its arguments with `error` appended, if this
    /// message is a template call.
    pub(crate) fn template_call(&self, error: &str) -> Option<(&str, Vec<String>)> {
        match self {
            Message::Format { template, args } if !args.is_empty() => {
                let args = args.iter().cloned().chain(iter::once(error.to_owned())).collect();
                Some((template.as_str(), args))
            }
            _ => None,
        }
    }

    /// Renders the final message for `error`.
    pub fn render(&self, error: &str) -> String {
        if let Some((template, args)) = self.template_call(error) {
            return render_template(template, &args);
        }

        match self {
            Message::None => error.to_owned(),
            Message::Text(text) | Message::Format { template: text, .. } => format!("{text}: {error}"),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Fills each `{}` in `template` with the next argument.
///
/// `{{` and `}}` produce literal braces. A placeholder with no argument left
/// stays as `{}`, surplus arguments are dropped.
pub fn render_template<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    let mut rendered = String::with_capacity(template.len() + args.iter().map(|arg| arg.as_ref().len()).sum::<usize>());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) => {
                chars.next();
                rendered.push('{');
            }
            ('{', Some('}')) => {
                chars.next();
                match args.next() {
                    Some(arg) => rendered.push_str(arg.as_ref()),
                    None => rendered.push_str("{}"),
                }
            }
            ('}', Some('}')) => {
                chars.next();
                rendered.push('}');
            }
            (c, _) => rendered.push(c),
        }
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::{render_template, Message};

    #[test]
    fn none_renders_bare_error() {
        assert_eq!(Message::None.render("测试错误"), "测试错误");
    }

    #[test]
    fn text_is_joined_with_error() {
        assert_eq!(Message::from("操作失败").render("测试错误"), "操作失败: 测试错误");
        assert_eq!(Message::text(String::from("load")).render("eof"), "load: eof");
    }

    #[test]
    fn template_receives_error_as_last_argument() {
        let message = Message::format("read {} failed: {}", ["config.toml"]);
        assert_eq!(message.render("not found"), "read config.toml failed: not found");
    }

    #[test]
    fn template_without_arguments_is_treated_as_text() {
        let message = Message::format("read {} failed", Vec::<String>::new());
        assert_eq!(message.render("eof"), "read {} failed: eof");
        assert_eq!(message.template_call("eof"), None);
    }

    #[test]
    fn template_call_appends_error() {
        let message = Message::format("{} + {} -> {}", [1, 2]);
        let (template, args) = message.template_call("overflow").unwrap();

        assert_eq!(template, "{} + {} -> {}");
        assert_eq!(args, ["1", "2", "overflow"]);
    }

    #[test]
    fn render_template_handles_escapes() {
        assert_eq!(render_template("{{{}}}", &["x"]), "{x}");
        assert_eq!(render_template("}{", &["x"]), "}{");
    }

    #[test]
    fn render_template_with_missing_and_surplus_args() {
        assert_eq!(render_template("{} and {}", &["a"]), "a and {}");
        assert_eq!(render_template("only {}", &["a", "b"]), "only a");
    }
}
