//! Static journal corpora used across harnesses.

/// The end-to-end scenario: three identical errors, one priority-6 message,
/// then a blank line and a garbage line.
pub const CORPUS_DISK_FULL: &[&str] = &[
    r#"{"MESSAGE":"disk full","PRIORITY":"3"}"#,
    r#"{"MESSAGE":"disk full","PRIORITY":"3"}"#,
    r#"{"MESSAGE":"disk full","PRIORITY":"3"}"#,
    r#"{"MESSAGE":"ok","PRIORITY":"6"}"#,
    "",
    "this is not json",
];

/// Realistic `journalctl -o json` lines, trimmed to a few fields each.
pub const CORPUS_JOURNAL: &[&str] = &[
    r#"{"__REALTIME_TIMESTAMP":"1705312801000000","PRIORITY":"6","_HOSTNAME":"edge1","SYSLOG_IDENTIFIER":"systemd","MESSAGE":"Started Session 4 of User alice."}"#,
    r#"{"__REALTIME_TIMESTAMP":"1705312802000000","PRIORITY":"3","_HOSTNAME":"edge1","SYSLOG_IDENTIFIER":"kernel","MESSAGE":"EXT4-fs error (device sda1): ext4_find_entry:1455: inode #2"}"#,
    r#"{"__REALTIME_TIMESTAMP":"1705312803000000","PRIORITY":"4","_HOSTNAME":"edge1","SYSLOG_IDENTIFIER":"NetworkManager","MESSAGE":"dhcp4 (wlan0): request timed out"}"#,
    r#"{"__REALTIME_TIMESTAMP":"1705312804000000","PRIORITY":"3","_HOSTNAME":"edge1","SYSLOG_IDENTIFIER":"kernel","MESSAGE":"EXT4-fs error (device sda1): ext4_find_entry:1455: inode #2"}"#,
    r#"{"__REALTIME_TIMESTAMP":"1705312805000000","PRIORITY":"2","_HOSTNAME":"edge1","SYSLOG_IDENTIFIER":"kernel","MESSAGE":"Out of memory: Killed process 4242 (java)"}"#,
    r#"{"__REALTIME_TIMESTAMP":"1705312806000000","PRIORITY":"5","_HOSTNAME":"edge1","SYSLOG_IDENTIFIER":"sudo","MESSAGE":"pam_unix(sudo:session): session opened for user root"}"#,
    r#"{"__REALTIME_TIMESTAMP":"1705312807000000","PRIORITY":"6","_HOSTNAME":"edge1","SYSLOG_IDENTIFIER":"systemd","MESSAGE":"Started Session 4 of User alice."}"#,
    r#"{"__REALTIME_TIMESTAMP":"1705312808000000","PRIORITY":"4","_HOSTNAME":"edge1","SYSLOG_IDENTIFIER":"NetworkManager","MESSAGE":"dhcp4 (wlan0): request timed out"}"#,
    r#"{"__REALTIME_TIMESTAMP":"1705312809000000","PRIORITY":"6","_HOSTNAME":"edge1","SYSLOG_IDENTIFIER":"systemd","MESSAGE":"Started Session 4 of User alice."}"#,
];

/// Lines that must never produce a record.
pub const CORPUS_GARBAGE: &[&str] = &[
    "",
    "   ",
    "\t",
    "-- No entries --",
    "Jan 15 10:00:02 myhost sshd[12345]: Failed password",
    r#"{"MESSAGE":"cut off mid-rec"#,
    "[1,2,3]",
    "42",
    "null",
];

/// `n` journal lines cycling through ten messages and four priorities.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let priority = match i % 10 {
                0 => "3",
                1 | 2 => "4",
                3 => "2",
                _ => "6",
            };
            format!(
                r#"{{"__REALTIME_TIMESTAMP":"{}","PRIORITY":"{}","MESSAGE":"log line {}"}}"#,
                1_705_312_800_000_000i64 + i as i64 * 1_000,
                priority,
                i % 10,
            )
        })
        .collect()
}
