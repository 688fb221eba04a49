//! Filter bar controls.
//!
//! The dashboard filter bar is a plain GET form: the category select, the
//! search box and, while a comments panel is open, a hidden `expanded`
//! field. Submitting it reloads the dashboard with the new view state.

use maud::{html, Markup, Render};

/// A form wrapping the filter controls.
#[derive(Debug)]
pub struct Form<'a> {
    pub action: &'a str,
    pub method: &'a str,
    pub content: Markup,
    pub class: Option<&'a str>,
    pub id: Option<&'a str>,
}

impl<'a> Form<'a> {
    /// A form that submits its fields as query parameters to `action`.
    #[must_use]
    pub fn get(action: &'a str, content: Markup) -> Self {
        Self {
            action,
            method: "get",
            content,
            class: None,
            id: None,
        }
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form action=(self.action) method=(self.method) class=[self.class] id=[self.id] {
                (self.content)
            }
        }
    }
}

/// A single-line field: the search box or a hidden carrier for view state.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    pub name: &'a str,
    pub kind: &'a str,
    pub value: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    pub id: Option<&'a str>,
    pub class: Option<&'a str>,
}

impl<'a> Input<'a> {
    fn with_kind(name: &'a str, kind: &'a str) -> Self {
        Self {
            name,
            kind,
            value: None,
            placeholder: None,
            id: None,
            class: None,
        }
    }

    /// Free-text search box.
    #[must_use]
    pub fn search(name: &'a str) -> Self {
        Self::with_kind(name, "search")
    }

    /// Hidden field that carries `value` through a submit unchanged.
    /// An empty value is still sent.
    #[must_use]
    pub fn hidden(name: &'a str, value: &'a str) -> Self {
        Self::with_kind(name, "hidden").value(value)
    }

    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl Render for Input<'_> {
    fn render(&self) -> Markup {
        html! {
            input
                type=(self.kind)
                name=(self.name)
                value=[self.value]
                placeholder=[self.placeholder]
                id=[self.id]
                class=[self.class];
        }
    }
}

/// Category dropdown. Options keep insertion order, so the `All` entry goes
/// first and the categories follow in first-seen order.
#[derive(Debug)]
pub struct Select<'a> {
    pub name: &'a str,
    pub options: Vec<SelectOption<'a>>,
    pub selected: Option<&'a str>,
    pub id: Option<&'a str>,
    pub class: Option<&'a str>,
    /// Reload as soon as the selection changes
    pub auto_submit: bool,
}

impl<'a> Select<'a> {
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            options: Vec::new(),
            selected: None,
            id: None,
            class: None,
            auto_submit: false,
        }
    }

    #[must_use]
    pub fn option(mut self, value: &'a str, label: &'a str) -> Self {
        self.options.push(SelectOption { value, label });
        self
    }

    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption<'a>>) -> Self {
        self.options.extend(options);
        self
    }

    /// Mark the option whose value equals `selected`. Matching is exact; a
    /// selection with no matching option leaves the browser default.
    #[must_use]
    pub fn selected(mut self, selected: &'a str) -> Self {
        self.selected = Some(selected);
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn auto_submit(mut self) -> Self {
        self.auto_submit = true;
        self
    }
}

impl Render for Select<'_> {
    fn render(&self) -> Markup {
        html! {
            select
                name=(self.name)
                id=[self.id]
                class=[self.class]
                onchange=[self.auto_submit.then_some("this.form.submit()")]
            {
                @for opt in &self.options {
                    option value=(opt.value) selected[self.selected == Some(opt.value)] {
                        (opt.label)
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectOption<'a> {
    pub value: &'a str,
    pub label: &'a str,
}

impl<'a> SelectOption<'a> {
    #[must_use]
    pub const fn new(value: &'a str, label: &'a str) -> Self {
        Self { value, label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_form() {
        let form = Form::get("/", html! { "inner" }).class("filter-bar");
        let html = form.render().into_string();

        assert_eq!(
            html,
            r#"<form action="/" method="get" class="filter-bar">inner</form>"#
        );
    }

    #[test]
    fn test_search_input() {
        let html = Input::search("q")
            .value("lao")
            .placeholder("Search post...")
            .render()
            .into_string();

        assert_eq!(
            html,
            r#"<input type="search" name="q" value="lao" placeholder="Search post...">"#
        );
    }

    #[test]
    fn test_hidden_input() {
        let html = Input::hidden("expanded", "42").render().into_string();
        assert_eq!(html, r#"<input type="hidden" name="expanded" value="42">"#);
    }

    #[test]
    fn test_hidden_input_keeps_empty_value() {
        let html = Input::hidden("expanded", "").render().into_string();
        assert_eq!(html, r#"<input type="hidden" name="expanded" value="">"#);
    }

    #[test]
    fn test_select_marks_selected() {
        let html = Select::new("category")
            .option("All", "All Pages")
            .options([SelectOption::new("LaoPride", "LaoPride")])
            .selected("LaoPride")
            .render()
            .into_string();

        assert!(html.contains(r#"<option value="All">All Pages</option>"#));
        assert!(html.contains(r#"<option value="LaoPride" selected>LaoPride</option>"#));
        assert!(!html.contains("onchange"));
    }

    #[test]
    fn test_select_auto_submit() {
        let html = Select::new("category").auto_submit().render().into_string();
        assert!(html.contains(r#"onchange="this.form.submit()""#));
    }
}
