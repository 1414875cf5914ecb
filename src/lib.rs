//! MOD Attendance System - 学校考勤记录后端服务
//!
//! 基于 Actix Web 构建的考勤录入与报表导出系统。
//! 同一个考勤服务按 house / class 两种模式实例化，外加一个
//! 调度入口，三个监听实例共享一套存储。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
