/// ## Operand stack
///
/// Values are pushed and popped at the top only.
/// Popping an empty stack is not an error, it yields `None`.

pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack { vec: vec![] }
    }
}

impl<T> Stack<T> {
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val);
    }
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }
    /// Pops the top two values, returned as `(second, top)`.
    /// Nothing is popped when fewer than two values remain.
    pub fn pop_2(&mut self) -> Option<(T, T)> {
        if self.vec.len() < 2 {
            return None;
        }
        let two = self.vec.pop()?;
        let one = self.vec.pop()?;
        Some((one, two))
    }
}

impl Stack<f64> {
    /// Bottom to top, fixed point with six decimals.
    pub fn render(&self) -> Vec<String> {
        self.iter().map(|val| format_val(*val)).collect()
    }
}

fn format_val(val: f64) -> String {
    if val.is_nan() {
        return "nan".to_string();
    }
    format!("{:.6}", val)
}
