/// Hidden value cell. Never drawn; only wiring code reads or writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State<T> {
    pub value: T,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn set(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    pub fn get(&self) -> &T {
        &self.value
    }
}
