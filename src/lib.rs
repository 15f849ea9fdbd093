pub mod calc;
pub mod console;
pub mod greeting;
pub mod operand;
pub mod operator;
pub mod session;
