use anyhow::{bail, Result};

/// A stack that also reports its minimum in O(1).
///
/// `mins` holds the running minimum at each depth where it changed or tied,
/// so it is non-increasing from bottom to top and its top is always the
/// minimum of `stack`. `pop`, `top` and `get_min` on an empty stack are
/// errors.
#[derive(Clone, Debug, Default)]
pub struct MinStack<T> {
    stack: Vec<T>,
    mins: Vec<T>,
}

impl<T: PartialOrd + Clone> MinStack<T> {
    pub fn new() -> Self {
        MinStack {
            stack: Vec::new(),
            mins: Vec::new(),
        }
    }

    pub fn push(&mut self, x: T) {
        if self.mins.last().map_or(true, |m| x <= *m) {
            self.mins.push(x.clone());
        }
        self.stack.push(x);
    }

    pub fn pop(&mut self) -> Result<T> {
        let Some(x) = self.stack.pop() else {
            bail!("pop on empty stack");
        };
        if self.mins.last() == Some(&x) {
            self.mins.pop();
        }
        Ok(x)
    }

    pub fn top(&self) -> Result<&T> {
        match self.stack.last() {
            Some(x) => Ok(x),
            None => bail!("top on empty stack"),
        }
    }

    pub fn get_min(&self) -> Result<&T> {
        match self.mins.last() {
            Some(x) => Ok(x),
            None => bail!("get_min on empty stack"),
        }
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_are_tracked() {
        let mut s = MinStack::new();
        s.push(2);
        s.push(1);
        s.push(1);
        assert_eq!(s.mins, vec![2, 1, 1]);
        s.pop().unwrap();
        assert_eq!(*s.get_min().unwrap(), 1);
        s.pop().unwrap();
        assert_eq!(*s.get_min().unwrap(), 2);
    }
}
