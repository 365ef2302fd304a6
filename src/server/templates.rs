use crate::Result;
use minijinja::{Environment, context};

const INDEX_TEMPLATE: &str = "index.html";
const HOME_TEMPLATE: &str = "home.html";

/// Page templates, compiled into the binary.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))?;
        env.add_template(HOME_TEMPLATE, include_str!("../../templates/home.html"))?;

        Ok(Self { env })
    }

    pub fn render_index(&self) -> Result<String> {
        let template = self.env.get_template(INDEX_TEMPLATE)?;
        Ok(template.render(context! {})?)
    }

    /// Form page. `results` and `error` are both `None` for a plain GET.
    pub fn render_home(&self, results: Option<f64>, error: Option<&str>) -> Result<String> {
        let template = self.env.get_template(HOME_TEMPLATE)?;
        Ok(template.render(context! { results => results, error => error })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_index() {
        let templates = Templates::new().unwrap();
        let html = templates.render_index().unwrap();

        assert!(html.contains("href=\"/predictdata\""));
    }

    #[test]
    fn test_render_home_empty() {
        let templates = Templates::new().unwrap();
        let html = templates.render_home(None, None).unwrap();

        assert!(html.contains("action=\"/predictdata\""));
        assert!(html.contains("name=\"reading_score\""));
        assert!(!html.contains("class=\"result\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_render_home_with_result() {
        let templates = Templates::new().unwrap();
        let html = templates.render_home(Some(71.5), None).unwrap();

        assert!(html.contains("71.5"));
        assert!(html.contains("class=\"result\""));
    }

    #[test]
    fn test_render_home_zero_result_is_shown() {
        let templates = Templates::new().unwrap();
        let html = templates.render_home(Some(0.0), None).unwrap();

        assert!(html.contains("class=\"result\""));
    }

    #[test]
    fn test_render_home_escapes_error() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render_home(None, Some("An error occurred: <script>x</script>"))
            .unwrap();

        assert!(html.contains("class=\"error\""));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>x</script>"));
    }
}
