//! 进程级共享 HTTP 客户端：所有传输引擎复用同一个连接池。

pub mod functions;
pub mod structs;
