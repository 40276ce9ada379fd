/// Mock Renderer for unit tests
///
/// Records every notification it receives so tests can check how many
/// notifications a camera mutation produced and with which matrices.

#[cfg(test)]
use crate::renderer::{CameraRenderer, CameraMatrices, MatrixChange};

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockRenderer {
    pub notifications: Vec<(MatrixChange, CameraMatrices)>,
}

#[cfg(test)]
impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }

    pub fn last(&self) -> Option<&(MatrixChange, CameraMatrices)> {
        self.notifications.last()
    }
}

#[cfg(test)]
impl CameraRenderer for MockRenderer {
    fn update_matrices(&mut self, changed: MatrixChange, matrices: &CameraMatrices) {
        self.notifications.push((changed, *matrices));
    }
}
