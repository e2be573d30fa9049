use amhp_core::catalog::{ResourceTab, find_resource};
use amhp_core::error::{Result, ValidationError};
use amhp_core::event::{AppEvent, StatusKind};

use crate::app::AmhpApp;

impl AmhpApp {
    /// Switches the resources screen tab. Unknown tabs are ignored.
    pub async fn show_tab(&self, tab: &str) -> Option<ResourceTab> {
        let Some(tab) = ResourceTab::parse(tab) else {
            tracing::debug!(tab, "Ignoring unknown resource tab");
            return None;
        };
        self.lock().await.active_tab = tab;
        self.emit(AppEvent::TabChanged(tab));
        Some(tab)
    }

    /// Starts an exercise or meditation; guided instructions follow shortly.
    pub async fn start_resource(&self, title: &str) -> Result<()> {
        let resource = find_resource(title)
            .ok_or_else(|| ValidationError::UnknownResource(title.to_string()))?;

        let mut state = self.lock().await;
        self.show_status(&mut state, resource.start_message(), StatusKind::Success);
        self.announce(format!(
            "Starting {}. {}. Duration: {}.",
            resource.title,
            resource.display_description(),
            resource.duration
        ));
        tracing::info!(title = resource.title, "Resource started");

        let app = self.clone();
        self.schedule(self.config().timing.exercise_notice(), async move {
            let mut state = app.lock().await;
            app.show_status(&mut state, resource.instructions(), StatusKind::Success);
        });
        Ok(())
    }
}
