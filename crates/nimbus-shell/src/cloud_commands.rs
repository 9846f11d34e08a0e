//! Simulated cloud-resource CLI: gcloud usage, instance lifecycle
//! (create/describe/start/stop/delete), listing, logs, and metrics.
//!
//! Instances carry identity and status only; every telemetry figure is
//! drawn fresh from the entropy source at query time.

use nimbus_types::error::{NimbusError, Result};
use nimbus_types::model::{Instance, InstanceKind, InstanceStatus};

use crate::artifacts;
use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register the cloud-resource commands into a registry.
pub fn register_cloud_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(GcloudCmd));
    reg.register(Box::new(InstancesCmd));
    reg.register(Box::new(CreateCmd));
    reg.register(Box::new(DescribeCmd));
    reg.register(Box::new(LogsCmd));
    reg.register(Box::new(MetricsCmd));
    reg.register(Box::new(StartCmd));
    reg.register(Box::new(StopCmd));
    reg.register(Box::new(DeleteCmd));
}

const GCLOUD_USAGE: &str = "\
Usage: gcloud-style resource commands

  instances list                  List instances
  create instance <name> <kind>   Create an instance
                                  kinds: compute, database, storage, network, security
  describe instance <name>        Show instance details
  start instance <name>           Start an instance
  stop instance <name>            Stop an instance
  delete instance <name>          Delete an instance
  logs <name>                     Show instance logs
  metrics <name>                  Show instance metrics";

/// Validate the literal `instance` sub-verb and extract the name argument.
fn instance_arg<'a>(args: &[&'a str], usage: &str) -> Result<&'a str> {
    match args {
        ["instance", name] => Ok(*name),
        _ => Err(NimbusError::Usage(format!("usage: {usage}"))),
    }
}

fn not_found(name: &str) -> NimbusError {
    NimbusError::NotFound(format!("Instance '{name}' not found."))
}

// ---------------------------------------------------------------------------
// gcloud
// ---------------------------------------------------------------------------

struct GcloudCmd;
impl Command for GcloudCmd {
    fn name(&self) -> &str {
        "gcloud"
    }
    fn description(&self) -> &str {
        "Cloud CLI usage summary"
    }
    fn usage(&self) -> &str {
        "gcloud"
    }
    fn category(&self) -> &str {
        "cloud"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(GCLOUD_USAGE.to_string()))
    }
}

// ---------------------------------------------------------------------------
// instances list
// ---------------------------------------------------------------------------

struct InstancesCmd;
impl Command for InstancesCmd {
    fn name(&self) -> &str {
        "instances"
    }
    fn description(&self) -> &str {
        "List instances"
    }
    fn usage(&self) -> &str {
        "instances list"
    }
    fn category(&self) -> &str {
        "cloud"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if args != ["list"] {
            return Err(NimbusError::Usage(format!("usage: {}", self.usage())));
        }
        if env.session.instances().next().is_none() {
            return Ok(CommandOutput::Text("No instances found.".to_string()));
        }
        let mut lines = vec![format!("{:<20} {:<10} STATUS", "NAME", "KIND")];
        for instance in env.session.instances() {
            lines.push(format!(
                "{:<20} {:<10} {}",
                instance.name, instance.kind, instance.status,
            ));
        }
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// create instance
// ---------------------------------------------------------------------------

struct CreateCmd;
impl Command for CreateCmd {
    fn name(&self) -> &str {
        "create"
    }
    fn description(&self) -> &str {
        "Create an instance"
    }
    fn usage(&self) -> &str {
        "create instance <name> <kind>"
    }
    fn category(&self) -> &str {
        "cloud"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let (name, kind_str) = match args {
            ["instance", name, kind] => (*name, *kind),
            _ => {
                return Err(NimbusError::Usage(format!("usage: {}", self.usage())));
            },
        };
        let kind: InstanceKind = kind_str.parse().map_err(|_| {
            NimbusError::Usage(format!(
                "invalid kind '{kind_str}' -- expected one of: compute, database, storage, network, security"
            ))
        })?;

        if env.session.instance(name).is_some() {
            return Ok(CommandOutput::Text(format!(
                "Instance '{name}' already exists."
            )));
        }

        let id = artifacts::instance_id(env.rng);
        env.session.add_instance(Instance {
            id: id.clone(),
            name: name.to_string(),
            status: InstanceStatus::Stopped,
            kind,
        });
        log::debug!("created instance {name} ({kind})");
        Ok(CommandOutput::Text(format!(
            "Created instance '{name}' ({kind}, id {id}). Status: stopped."
        )))
    }
}

// ---------------------------------------------------------------------------
// describe instance
// ---------------------------------------------------------------------------

struct DescribeCmd;
impl Command for DescribeCmd {
    fn name(&self) -> &str {
        "describe"
    }
    fn description(&self) -> &str {
        "Show instance details"
    }
    fn usage(&self) -> &str {
        "describe instance <name>"
    }
    fn category(&self) -> &str {
        "cloud"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let name = instance_arg(args, self.usage())?;
        let Some(instance) = env.session.instance(name) else {
            return Err(not_found(name));
        };
        let (id, kind, status) = (instance.id.clone(), instance.kind, instance.status);
        let created = env.clock.now().to_string();
        let suffix = artifacts::ip_suffix(env.rng);
        let cpu = artifacts::percent(env.rng);
        let memory = artifacts::megabytes(env.rng);
        let disk = artifacts::disk_gb(env.rng);
        Ok(CommandOutput::Text(format!(
            "Instance: {name}\n\
             \x20 Id:          {id}\n\
             \x20 Kind:        {kind}\n\
             \x20 Status:      {status}\n\
             \x20 Created:     {created}\n\
             \x20 Internal IP: 10.0.0.{suffix}\n\
             \x20 CPU:         {cpu}%\n\
             \x20 Memory:      {memory} MB\n\
             \x20 Disk:        {disk} GB"
        )))
    }
}

// ---------------------------------------------------------------------------
// logs
// ---------------------------------------------------------------------------

struct LogsCmd;
impl Command for LogsCmd {
    fn name(&self) -> &str {
        "logs"
    }
    fn description(&self) -> &str {
        "Show instance logs"
    }
    fn usage(&self) -> &str {
        "logs <name>"
    }
    fn category(&self) -> &str {
        "cloud"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let name = args
            .first()
            .ok_or_else(|| NimbusError::Usage(format!("usage: {}", self.usage())))?;
        if env.session.instance(name).is_none() {
            return Err(not_found(name));
        }
        let ts = env.clock.now().iso8601();
        Ok(CommandOutput::Text(format!(
            "{ts} [INFO]  Instance '{name}' heartbeat OK\n\
             {ts} [INFO]  Health check passed (200 OK)\n\
             {ts} [WARN]  Transient latency spike on internal network\n\
             {ts} [INFO]  Scheduled snapshot completed\n\
             {ts} [INFO]  Instance '{name}' heartbeat OK"
        )))
    }
}

// ---------------------------------------------------------------------------
// metrics
// ---------------------------------------------------------------------------

struct MetricsCmd;
impl Command for MetricsCmd {
    fn name(&self) -> &str {
        "metrics"
    }
    fn description(&self) -> &str {
        "Show instance metrics"
    }
    fn usage(&self) -> &str {
        "metrics <name>"
    }
    fn category(&self) -> &str {
        "cloud"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let name = args
            .first()
            .ok_or_else(|| NimbusError::Usage(format!("usage: {}", self.usage())))?;
        if env.session.instance(name).is_none() {
            return Err(not_found(name));
        }
        let cpu = artifacts::percent(env.rng);
        let memory = artifacts::megabytes(env.rng);
        let disk = artifacts::disk_gb(env.rng);
        let net_in = artifacts::throughput(env.rng);
        let net_out = artifacts::throughput(env.rng);
        let response = artifacts::throughput(env.rng);
        Ok(CommandOutput::Text(format!(
            "Metrics for '{name}':\n\
             \x20 CPU:            {cpu}%\n\
             \x20 Memory:         {memory} MB\n\
             \x20 Disk:           {disk} GB\n\
             \x20 Network in:     {net_in} KB/s\n\
             \x20 Network out:    {net_out} KB/s\n\
             \x20 Response time:  {response} ms"
        )))
    }
}

// ---------------------------------------------------------------------------
// start / stop instance
// ---------------------------------------------------------------------------

struct StartCmd;
impl Command for StartCmd {
    fn name(&self) -> &str {
        "start"
    }
    fn description(&self) -> &str {
        "Start an instance"
    }
    fn usage(&self) -> &str {
        "start instance <name>"
    }
    fn category(&self) -> &str {
        "cloud"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let name = instance_arg(args, self.usage())?;
        let instance = env.session.instance_mut(name).ok_or_else(|| not_found(name))?;
        if instance.status == InstanceStatus::Running {
            return Ok(CommandOutput::Text(format!(
                "Instance '{name}' is already running."
            )));
        }
        instance.status = InstanceStatus::Running;
        Ok(CommandOutput::Text(format!(
            "Starting instance '{name}'...\nInstance '{name}' is now running."
        )))
    }
}

struct StopCmd;
impl Command for StopCmd {
    fn name(&self) -> &str {
        "stop"
    }
    fn description(&self) -> &str {
        "Stop an instance"
    }
    fn usage(&self) -> &str {
        "stop instance <name>"
    }
    fn category(&self) -> &str {
        "cloud"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let name = instance_arg(args, self.usage())?;
        let instance = env.session.instance_mut(name).ok_or_else(|| not_found(name))?;
        if instance.status == InstanceStatus::Stopped {
            return Ok(CommandOutput::Text(format!(
                "Instance '{name}' is already stopped."
            )));
        }
        instance.status = InstanceStatus::Stopped;
        Ok(CommandOutput::Text(format!(
            "Stopping instance '{name}'...\nInstance '{name}' is now stopped."
        )))
    }
}

// ---------------------------------------------------------------------------
// delete instance
// ---------------------------------------------------------------------------

struct DeleteCmd;
impl Command for DeleteCmd {
    fn name(&self) -> &str {
        "delete"
    }
    fn description(&self) -> &str {
        "Delete an instance"
    }
    fn usage(&self) -> &str {
        "delete instance <name>"
    }
    fn category(&self) -> &str {
        "cloud"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let name = instance_arg(args, self.usage())?;
        // Removal is unconditional -- running instances go too.
        match env.session.remove_instance(name) {
            Some(_) => Ok(CommandOutput::Text(format!("Instance '{name}' deleted."))),
            None => Err(not_found(name)),
        }
    }
}
