use assert_cmd::Command;

pub fn planner_cmd() -> Command {
    let mut cmd = Command::cargo_bin("planner").unwrap();
    cmd.env_remove("PLANNER_ROOT");
    cmd.env_remove("PLANNER_API_URL");
    cmd
}
