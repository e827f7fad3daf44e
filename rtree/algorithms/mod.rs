// R-tree算法模块
//
// 这个模块包含R-tree的所有核心算法实现，按功能分解为不同的子模块：
// - search: 搜索和查询算法
// - insert: 插入和树构建算法
// - split: 节点分裂算法
// - utils: 共用的工具函数（路径访问、向上调整）
// - debug: 调试输出和结构校验

pub mod debug;
pub mod insert;
pub mod search;
pub mod split;
pub mod utils;
