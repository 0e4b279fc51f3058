//! Greeting scaffold kept from the project starter.

pub struct Hello;

impl Hello {
    pub fn print(&self) -> &'static str {
        "Hello, world!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_work() {
        assert_eq!(3, 1 + 2);
    }

    #[test]
    fn prints_the_greeting() {
        let hello = Hello;
        assert_eq!("Hello, world!", hello.print());
    }
}
