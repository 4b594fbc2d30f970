use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Drops hydration keys and marker comments so two renders can be compared.
pub fn normalize_markup(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    loop {
        let comment = rest.find("<!--");
        let hk = rest.find(" data-hk=\"");
        let next = match (comment, hk) {
            (Some(c), Some(h)) => Some(c.min(h)),
            (c, h) => c.or(h),
        };
        let Some(start) = next else {
            out.push_str(rest);
            break;
        };
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = if tail.starts_with("<!--") {
            tail.find("-->").map(|i| i + 3)
        } else {
            tail[" data-hk=\"".len()..]
                .find('"')
                .map(|i| i + " data-hk=\"".len() + 1)
        };
        match end {
            Some(end) => rest = &tail[end..],
            None => {
                out.push_str(tail);
                break;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_markup_strips_keys_and_comments() {
        let html = r#"<div data-hk="0-0-1"><!--hk=0-0-2|leptos-view|open--><p data-hk="0-0-3">x</p></div>"#;
        assert_eq!(normalize_markup(html), "<div><p>x</p></div>");
    }
}
