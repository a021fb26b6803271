//! Common expression fixtures for tests.

// Single conditions
pub const COND_A: &str = "{A:a.last(0)}>5";
pub const COND_B: &str = "{B:b.last(0)}<1";
pub const COND_C: &str = "{C:c.last(0)}=1";
pub const COND_D: &str = "{D:d.last(0)}=0";

pub const CPU_HIGH: &str = "{host1:system.cpu.util[,iowait].last(0)} > 50";
pub const CPU_HIGH_2: &str = "{host2:system.cpu.util[,iowait].last(0)} > 50";
pub const MACRO_THRESHOLD: &str = "{host:vfs.fs.size[/,pfree].last(0)}<{$FS.LOW}";
pub const QUOTED_THRESHOLD: &str = r#"{host:log[/var/log/app,"err (x)"].str("a }b")}="down now""#;
pub const NO_COMPARISON: &str = "{host:agent.ping.nodata(5m)}";

// Composite expressions
pub const AND_PAIR: &str = "{A:a.last(0)}>5 and {B:b.last(0)}<1";
pub const OR_OVER_AND: &str = "{A:a.last(0)}=1 or {B:b.last(0)}=1 and {C:c.last(0)}=1";
pub const GROUPED_OR: &str = "({A:a.last(0)}=1 or {B:b.last(0)}=1) and {C:c.last(0)}=1";
pub const AND_CHAIN: &str = "{A:a.last(0)}=1 and {B:b.last(0)}=1 and {C:c.last(0)}=1";

pub const NESTED_MIX: &str = r#"
    {h:cpu.load.avg(5m)}>5
    and ({h:mem.free.last(0)}<{$MEM.LOW} or {h:swap.free.last(0)}<10)
    and {h:agent.ping.nodata(3m)}=1
"#;

/// `count` distinct conditions joined by `connective`, e.g. `" or "`
pub fn condition_chain(count: usize, connective: &str) -> String {
    (0..count)
        .map(|i| format!("{{h:k.last({i})}}=1"))
        .collect::<Vec<_>>()
        .join(connective)
}
