use super::Parser;

/// Syntactic context flags passed down during recursive descent. Not part
/// of the AST; consulted only to validate `yield`, `await`, `break`,
/// `continue`, and `return` at the point of use.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context {
    pub in_function: bool,
    pub is_async: bool,
    pub is_generator: bool,
    pub in_loop: bool,
    pub in_switch: bool,
}

impl Context {
    /// The top level parses in module goal, where `await` is valid.
    pub fn top_level() -> Self {
        Self {
            in_function: false,
            is_async: true,
            is_generator: false,
            in_loop: false,
            in_switch: false,
        }
    }

    /// A function body starts with fresh loop/switch flags.
    pub fn function(is_async: bool, is_generator: bool) -> Self {
        Self {
            in_function: true,
            is_async,
            is_generator,
            in_loop: false,
            in_switch: false,
        }
    }
}

impl Parser {
    pub(crate) fn context(&self) -> Context {
        *self
            .contexts
            .last()
            .expect("context stack is never empty")
    }

    pub(crate) fn push_context(&mut self, context: Context) {
        self.contexts.push(context);
    }

    pub(crate) fn pop_context(&mut self) {
        self.contexts.pop();
    }

    pub(crate) fn enter_loop(&mut self) {
        let mut context = self.context();
        context.in_loop = true;
        self.contexts.push(context);
    }

    pub(crate) fn enter_switch(&mut self) {
        let mut context = self.context();
        context.in_switch = true;
        self.contexts.push(context);
    }
}
