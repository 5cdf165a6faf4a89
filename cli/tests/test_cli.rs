#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use std::process::{Command, Output};

    use tempfile::tempdir;

    const ENV_KEYS: [&str; 4] = ["MODELHDR_INPUT", "MODELHDR_OUTPUT", "MODELHDR_NAME", "MODELHDR_WRITE_POLICY"];

    fn modelhdr(cwd: &Path) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_modelhdr"));
        cmd.current_dir(cwd);
        for k in ENV_KEYS {
            cmd.env_remove(k);
        }
        cmd
    }

    fn stdout(o: &Output) -> String {
        String::from_utf8_lossy(&o.stdout).into_owned()
    }

    fn stderr(o: &Output) -> String {
        String::from_utf8_lossy(&o.stderr).into_owned()
    }

    #[test]
    fn convert_with_defaults_in_cwd() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("brightness_model.tflite"), [0x1C, 0x00, 0x00, 0x00]).unwrap();

        let out = modelhdr(dir.path()).arg("convert").output().unwrap();
        assert!(out.status.success(), "stderr: {}", stderr(&out));
        assert_eq!(stdout(&out), "Header file brightness_model.h created successfully.\n");

        let text = fs::read_to_string(dir.path().join("brightness_model.h")).unwrap();
        assert!(text.starts_with("#ifndef BRIGHTNESS_MODEL_H\n"));
        assert!(text.contains("    0x1C, 0x00, 0x00, 0x00, \n"));
        assert!(text.contains("const unsigned int brightness_model_len = 4;"));
    }

    #[test]
    fn missing_input_prints_error_and_fails() {
        let dir = tempdir().unwrap();
        let out = modelhdr(dir.path())
            .args(["convert", "--input", "missing.tflite", "--output", "missing.h"])
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(1));
        assert_eq!(stderr(&out).trim_end(), "Error: missing.tflite does not exist.");
        assert!(stdout(&out).is_empty());
        assert!(!dir.path().join("missing.h").exists());
    }

    #[test]
    fn flags_override_env() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.bin"), [1u8, 2]).unwrap();

        let out = modelhdr(dir.path())
            .env("MODELHDR_NAME", "from_env")
            .env("MODELHDR_INPUT", "a.bin")
            .args(["convert", "--output", "a.h", "--name", "from_flag", "--in-place"])
            .output()
            .unwrap();
        assert!(out.status.success(), "stderr: {}", stderr(&out));

        let text = fs::read_to_string(dir.path().join("a.h")).unwrap();
        assert!(text.contains("const unsigned char from_flag[] = {"));
    }

    #[test]
    fn dotenv_file_is_loaded() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("m.bin"), [0xFFu8]).unwrap();
        fs::write(
            dir.path().join(".env"),
            "MODELHDR_INPUT=m.bin\nMODELHDR_OUTPUT=m.h\nMODELHDR_NAME=dot\n",
        )
        .unwrap();

        let out = modelhdr(dir.path()).arg("convert").output().unwrap();
        assert!(out.status.success(), "stderr: {}", stderr(&out));
        assert!(fs::read_to_string(dir.path().join("m.h")).unwrap().contains("dot_len = 1;"));
    }

    #[test]
    fn stats_prints_json_snapshot() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("s.bin"), [0u8; 24]).unwrap();

        let out = modelhdr(dir.path())
            .args(["convert", "-i", "s.bin", "-o", "s.h", "-n", "s", "--stats"])
            .output()
            .unwrap();
        assert!(out.status.success(), "stderr: {}", stderr(&out));

        let text = stdout(&out);
        let json = text.split_once('\n').unwrap().1;
        assert!(json.contains("\"bytes_read\": 24"));
        assert!(json.contains("\"payload_lines\": 2"));
    }

    #[test]
    fn unwritable_output_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("x.bin"), [1u8]).unwrap();

        let out = modelhdr(dir.path())
            .args(["convert", "-i", "x.bin", "-o", "no/such/dir/x.h"])
            .output()
            .unwrap();
        assert_eq!(out.status.code(), Some(1));
        assert!(stderr(&out).starts_with("Error: cannot write no/such/dir/x.h"));
    }

    #[test]
    fn bad_policy_flag_is_rejected() {
        let dir = tempdir().unwrap();
        let out = modelhdr(dir.path())
            .args(["convert", "--policy", "sometimes"])
            .output()
            .unwrap();
        assert!(!out.status.success());
    }

    #[test]
    fn verify_round_trip() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("v.bin"), (0..50u8).collect::<Vec<_>>()).unwrap();

        let conv = modelhdr(dir.path())
            .args(["convert", "-i", "v.bin", "-o", "v.h", "-n", "v"])
            .output()
            .unwrap();
        assert!(conv.status.success());

        let out = modelhdr(dir.path())
            .args(["verify", "v.h", "--against", "v.bin"])
            .output()
            .unwrap();
        assert!(out.status.success(), "stderr: {}", stderr(&out));
        assert_eq!(stdout(&out), "OK v: 50 bytes\n");
    }

    #[test]
    fn verify_rejects_tampered_header() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("v.bin"), [1u8, 2, 3]).unwrap();
        modelhdr(dir.path())
            .args(["convert", "-i", "v.bin", "-o", "v.h", "-n", "v"])
            .output()
            .unwrap();

        let path = dir.path().join("v.h");
        let text = fs::read_to_string(&path).unwrap().replace("v_len = 3;", "v_len = 9;");
        fs::write(&path, text).unwrap();

        let out = modelhdr(dir.path()).args(["verify", "v.h"]).output().unwrap();
        assert_eq!(out.status.code(), Some(1));
        assert!(stderr(&out).contains("declared length 9 does not match payload length 3"));
    }
}
