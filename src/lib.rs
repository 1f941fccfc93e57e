//! # shengci-algo - 词汇课程排期核心算法库
//!
//! 本 crate 提供纯 Rust 实现的课程排期引擎:
//!
//! - **WordSet Normalizer** - 词表归一化 (去重、合并活动标签、输入校验)
//! - **Phonics Chunk Resolver** - 拼读分块 (人工表优先, 规则兜底)
//! - **Schedule Generator** - 前置加载 + 衰减分配的逐日排期
//! - **Schedule Validator** - 排期不变量校验 (一次收集全部问题)
//! - **Schedule Editor** - 手动拖拽编辑的全有或全无应用
//!
//! ## 设计理念
//!
//! - **纯函数核心** - 排期、校验、分块都是同步无副作用的计算, 可在任意
//!   并发环境调用
//! - **编辑不可变** - 每次成功编辑产生新的 Schedule 值, 原值不被修改
//! - **拼读永不失败** - 任何非空单词都能解析出分块, 学习进度不会被
//!   缺失内容阻塞
//! - **充分测试** - 单元测试 + proptest 属性测试覆盖全部不变量
//!
//! ## 模块结构
//!
//! - [`normalize`] - 词表归一化
//! - [`phonics`] - 拼读分块解析
//! - [`schedule`] - 排期生成 / 校验 / 编辑
//! - [`activity`] - 每日活动序列 (确定性顺序, 附带拼读分块)
//! - [`store`] - 课程持久化端口 (JSON 文件 / 内存实现)
//! - [`types`] - 公共类型和常量
//!
//! ## 使用示例
//!
//! ```rust
//! use shengci_algo::{normalize, generate, apply_move, RawEntry};
//!
//! let words = normalize(&[
//!     RawEntry::new("cat", &["vocabulary", "phonics"]),
//!     RawEntry::new("dog", &["spelling"]),
//!     RawEntry::new("bird", &["vocabulary"]),
//! ])
//! .expect("input is well-formed");
//!
//! let schedule = generate(&words, 3).expect("at least one word");
//! assert!(schedule.days[2].new_words.is_empty()); // 最后一天仅复习
//!
//! // 把 bird 的引入移到第 1 天
//! let intro = schedule.introduction_day("bird").unwrap();
//! let edited = apply_move(&schedule, &words, "bird", intro, 1, true);
//! assert!(edited.is_ok());
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod activity;
pub mod normalize;
pub mod phonics;
pub mod schedule;
pub mod store;
pub mod types;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出所有公共类型
pub use types::*;

/// 重新导出词表归一化
pub use normalize::{normalize, InputError, RawEntry};

/// 重新导出拼读分块
pub use phonics::{fallback_split, ChunkResolver};

/// 重新导出排期引擎
pub use schedule::{
    apply_move, generate, validate, EditError, ScheduleError, ValidationResult, Violation,
};

/// 重新导出每日活动序列
pub use activity::{day_activities, ActivityItem};

/// 重新导出持久化端口
pub use store::{JsonFileStore, LessonRecord, LessonStore, MemoryStore, StoreError};
