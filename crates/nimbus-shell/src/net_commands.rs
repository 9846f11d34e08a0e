//! Simulated network diagnostics: ping, ifconfig, netstat.
//!
//! Nothing here touches a socket. Replies are canned transcripts
//! addressed to whatever host the caller named.

use nimbus_types::error::{NimbusError, Result};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register the network diagnostic commands into a registry.
pub fn register_net_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(PingCmd));
    reg.register(Box::new(IfconfigCmd));
    reg.register(Box::new(NetstatCmd));
}

// ---------------------------------------------------------------------------
// ping
// ---------------------------------------------------------------------------

struct PingCmd;
impl Command for PingCmd {
    fn name(&self) -> &str {
        "ping"
    }
    fn description(&self) -> &str {
        "Send simulated echo requests to a host"
    }
    fn usage(&self) -> &str {
        "ping <host>"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let host = args
            .first()
            .ok_or_else(|| NimbusError::Usage(format!("usage: {}", self.usage())))?;
        Ok(CommandOutput::Text(format!(
            "PING {host} (10.0.0.1) 56(84) bytes of data.\n\
             64 bytes from {host} (10.0.0.1): icmp_seq=1 ttl=64 time=0.42 ms\n\
             64 bytes from {host} (10.0.0.1): icmp_seq=2 ttl=64 time=0.38 ms\n\
             64 bytes from {host} (10.0.0.1): icmp_seq=3 ttl=64 time=0.40 ms\n\
             \n\
             --- {host} ping statistics ---\n\
             3 packets transmitted, 3 received, 0% packet loss, time 2003ms\n\
             rtt min/avg/max/mdev = 0.380/0.400/0.420/0.016 ms"
        )))
    }
}

// ---------------------------------------------------------------------------
// ifconfig
// ---------------------------------------------------------------------------

struct IfconfigCmd;
impl Command for IfconfigCmd {
    fn name(&self) -> &str {
        "ifconfig"
    }
    fn description(&self) -> &str {
        "Show network interface configuration"
    }
    fn usage(&self) -> &str {
        "ifconfig"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(
            "eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500\n\
             \x20       inet 10.0.0.2  netmask 255.255.255.0  broadcast 10.0.0.255\n\
             \x20       ether 02:42:0a:00:00:02  txqueuelen 1000  (Ethernet)\n\
             \x20       RX packets 184223  bytes 241038166 (229.8 MiB)\n\
             \x20       TX packets 97411  bytes 8912745 (8.4 MiB)\n\
             \n\
             lo: flags=73<UP,LOOPBACK,RUNNING>  mtu 65536\n\
             \x20       inet 127.0.0.1  netmask 255.0.0.0\n\
             \x20       loop  txqueuelen 1000  (Local Loopback)\n\
             \x20       RX packets 1842  bytes 163220 (159.3 KiB)\n\
             \x20       TX packets 1842  bytes 163220 (159.3 KiB)"
                .to_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// netstat
// ---------------------------------------------------------------------------

struct NetstatCmd;
impl Command for NetstatCmd {
    fn name(&self) -> &str {
        "netstat"
    }
    fn description(&self) -> &str {
        "Show active network connections"
    }
    fn usage(&self) -> &str {
        "netstat"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(
            "Active Internet connections (w/o servers)\n\
             Proto Recv-Q Send-Q Local Address           Foreign Address         State\n\
             tcp        0      0 10.0.0.2:22             10.0.0.10:51234         ESTABLISHED\n\
             tcp        0      0 10.0.0.2:443            10.0.0.11:44102         ESTABLISHED\n\
             tcp        0      0 10.0.0.2:5432           10.0.0.12:39988         TIME_WAIT\n\
             tcp        0      0 127.0.0.1:6379          127.0.0.1:50214         ESTABLISHED"
                .to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::testutil::test_shell;

    #[test]
    fn ping_addresses_the_named_host() {
        let mut shell = test_shell();
        let out = shell.run_line("ping gateway.internal").unwrap();
        assert!(out.starts_with("PING gateway.internal"));
        assert_eq!(
            out.lines().filter(|l| l.contains("icmp_seq=")).count(),
            3
        );
        assert!(out.contains("--- gateway.internal ping statistics ---"));
        assert!(out.contains("0% packet loss"));
    }

    #[test]
    fn ping_without_host_is_usage() {
        let mut shell = test_shell();
        assert_eq!(shell.run_line("ping").unwrap(), "usage: ping <host>");
    }

    #[test]
    fn ifconfig_lists_eth0_and_loopback() {
        let mut shell = test_shell();
        let out = shell.run_line("ifconfig").unwrap();
        assert!(out.contains("eth0: flags="));
        assert!(out.contains("lo: flags="));
        assert!(out.contains("inet 127.0.0.1"));
    }

    #[test]
    fn netstat_prints_connection_table() {
        let mut shell = test_shell();
        let out = shell.run_line("netstat").unwrap();
        assert!(out.starts_with("Active Internet connections"));
        assert!(out.contains("ESTABLISHED"));
        assert!(out.lines().count() >= 4);
    }
}
