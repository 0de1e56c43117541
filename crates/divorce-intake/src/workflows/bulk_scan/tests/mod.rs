mod common;

mod marriage;
