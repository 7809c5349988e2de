#![doc = include_str!("../README.md")]

pub use vc_bean as bean;
