use std::{error::Error, fs::File, io::Write, path::Path};

fn append_invocation(workdir: &Path) -> std::io::Result<()> {
    let mut file = File::options()
        .append(true)
        .create(true)
        .open(workdir.join("invocations"))?;
    for arg in std::env::args().skip(1) {
        file.write_all(arg.as_bytes())?;
        file.write_all(b"\n")?;
    }
    file.write_all(b"\n")?;
    Ok(())
}

fn get_exit_status(workdir: &Path) -> Result<i32, Box<dyn Error>> {
    let exit_status = std::fs::read_to_string(workdir.join("exit-status"))?
        .trim()
        .parse()?;
    Ok(exit_status)
}

fn should_fail_invocation(workdir: &Path) -> bool {
    let fail_on = match std::fs::read_to_string(workdir.join("fail-on")) {
        Ok(fail_on) => fail_on,
        Err(_) => return false,
    };
    std::env::args().skip(1).any(|arg| arg == fail_on.trim())
}

fn copy_stdout(workdir: &Path) -> std::io::Result<()> {
    let mut file = File::open(workdir.join("stdout"))?;
    std::io::copy(&mut file, &mut std::io::stdout())?;
    Ok(())
}

/// Entry point of the fake converter: records its arguments next to its executable, prints the
/// prepared stdout and exits with the prepared status.
pub fn test_binary_main() {
    let workdir = std::env::current_exe()
        .unwrap()
        .parent()
        .unwrap()
        .to_owned();
    let _ = append_invocation(&workdir);
    let _ = copy_stdout(&workdir);

    if should_fail_invocation(&workdir) {
        std::process::exit(1);
    }
    let exit_status = get_exit_status(&workdir).unwrap_or(0);
    std::process::exit(exit_status);
}
