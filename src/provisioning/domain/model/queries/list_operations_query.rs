#[derive(Clone, Debug, Default)]
pub struct ListOperationsQuery {
    include_finished: bool,
}

impl ListOperationsQuery {
    pub fn new(include_finished: bool) -> Self {
        Self { include_finished }
    }

    pub fn include_finished(&self) -> bool {
        self.include_finished
    }
}
