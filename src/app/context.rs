/// Application context holding the collaborators a command runs against.
pub struct AppContext<C, S, P, D> {
    catalog: C,
    carts: S,
    prompter: P,
    presenter: D,
}

impl<C, S, P, D> AppContext<C, S, P, D> {
    /// Create a new application context.
    pub fn new(catalog: C, carts: S, prompter: P, presenter: D) -> Self {
        Self { catalog, carts, prompter, presenter }
    }

    /// Get a reference to the SKU catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Get a reference to the cart service.
    pub fn carts(&self) -> &S {
        &self.carts
    }

    /// Get a reference to the operator prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Get a reference to the output presenter.
    pub fn presenter(&self) -> &D {
        &self.presenter
    }
}
