use crate::args::Args;

/// Page-level settings fixed at startup and shared by every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub page_title: String,
    pub root_path: String,
}

impl UiConfig {
    /// Path the form posts to, also the page's own path.
    pub fn form_action(&self) -> String {
        format!("{}/", self.root_path)
    }
}

impl From<&Args> for UiConfig {
    fn from(args: &Args) -> Self {
        Self {
            page_title: args.ui.page_title.clone(),
            root_path: args.server.root_path.clone(),
        }
    }
}
