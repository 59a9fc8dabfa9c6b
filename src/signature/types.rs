use serde::Serialize;

/// Method name and parameter text extracted from one source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawSignature {
    /// Last whitespace-separated token before the first `(`.
    pub name: String,
    /// Exact text between the first `(` and the first `)`.
    pub args_raw: String,
}

/// A bound parameter, ready to be declared inside a test body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub ty: String,
    pub identifier: String,
    /// Literal used to initialize the local; `None` leaves it default-constructed.
    pub initializer: Option<String>,
}

impl Argument {
    #[must_use]
    pub fn new(ty: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            identifier: identifier.into(),
            initializer: None,
        }
    }

    #[must_use]
    pub fn with_initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }

    /// Render as a local declaration, e.g. `int x=0;` or `Foo z;`.
    #[must_use]
    pub fn declaration(&self) -> String {
        match &self.initializer {
            Some(init) => format!("{} {}={init};", self.ty, self.identifier),
            None => format!("{} {};", self.ty, self.identifier),
        }
    }
}
