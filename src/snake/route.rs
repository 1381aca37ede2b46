/// Path-local visited map, sized to one puzzle.
///
/// Each search start gets a fresh Route, so paths from different starts
/// never see each other's footprints. Backtracking frees cells through
/// [`leave`](Route::leave), keeping the map exact for the current path.
#[derive(Debug, Clone)]
pub struct Route {
    width: usize,
    height: usize,
    visited: Vec<bool>,
}

/// (width, height) construction
impl From<(usize, usize)> for Route {
    fn from((width, height): (usize, usize)) -> Self {
        Self {
            width,
            height,
            visited: vec![false; width * height],
        }
    }
}

impl Route {
    /// in bounds and not yet on the path
    pub fn available(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && !self.visited[y * self.width + x]
    }
    /// put a cell on the path
    pub fn visit(&mut self, x: usize, y: usize) {
        self.visited[y * self.width + x] = true;
    }
    /// take a cell back off the path
    pub fn leave(&mut self, x: usize, y: usize) {
        self.visited[y * self.width + x] = false;
    }
}
