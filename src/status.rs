use colored::*;

pub enum Kind {
    Warn,
    Fatal,
}

pub struct Status(pub Kind, pub &'static str);

impl Status {
    pub fn warn() -> Status {
        Status(Kind::Warn, "Warning")
    }

    pub fn fatal() -> Status {
        Status(Kind::Fatal, "Fatal")
    }

    fn tag(&self) -> ColoredString {
        match self.0 {
            Kind::Warn => self.1.yellow(),
            Kind::Fatal => self.1.red(),
        }
        .bold()
    }

    fn multiline(&self, lines: Vec<&str>) {
        eprintln!("\n{} ", self.tag());
        for line in lines {
            eprintln!("{}", line);
        }
        eprintln!()
    }

    pub fn log(&self, message: &str) {
        let lines = message.lines().collect::<Vec<&str>>();

        if lines.len() > 1 {
            self.multiline(lines);
        } else {
            eprintln!("{:>12} {}", self.tag(), message);
        }
    }
}
