//! 进度快照领域模块：传输引擎每次通知观察者时创建的不可变值。

pub mod structs;
