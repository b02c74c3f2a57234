use crate::add_test;
use crate::common::{
    generate_random_data, generate_random_data_with_seed, reference_xor, strip_trailing_zeros,
    Fixture,
};
use crate::{KB, MB};

// Test a missing input fails validation with a usage error
add_test!(missing_file_is_usage_error, async {
    let fixture = Fixture::with_file("present.bin", b"data");

    let output = fixture
        .run_xor(&[&fixture.path("present.bin"), &fixture.path("missing.bin")])
        .await;

    assert_eq!(output.code(), 2);
    assert!(output.stderr.contains("not found"));
    assert!(output.stdout_raw.is_empty());
});

// Test two stdin sentinels are rejected
add_test!(multiple_stdin_is_rejected, async {
    let fixture = Fixture::new();

    let output = fixture.run_xor(&["-", "-"]).await;

    assert_eq!(output.code(), 2);
    assert!(output.stderr.contains("cannot read multiple files from stdin"));
});

// Test the same underlying file cannot be both inputs
add_test!(same_file_is_rejected, async {
    let fixture = Fixture::with_file("a.bin", b"data");
    let path = fixture.path("a.bin");

    let output = fixture.run_xor(&[&path, &path]).await;

    assert_eq!(output.code(), 2);
    assert!(output.stderr.contains("same file"));
});

// Test a directory is rejected as an input
add_test!(directory_input_is_rejected, async {
    let fixture = Fixture::with_file("a.bin", b"data");
    let dir = fixture.root_dir_path().display().to_string();

    let output = fixture.run_xor(&[&dir, &fixture.path("a.bin")]).await;

    assert_eq!(output.code(), 2);
    assert!(output.stderr.contains("not a readable file"));
});

// Test large unequal inputs against a reference combine
add_test!(large_unequal_inputs_match_reference, async {
    let a = generate_random_data(MB);
    let b = generate_random_data_with_seed(300 * KB, 31337);
    let fixture = Fixture::with_files(&["a.bin", "b.bin"], &[&a, &b]);
    let path_a = fixture.path("a.bin");
    let path_b = fixture.path("b.bin");

    let expected = reference_xor(&a, &b);

    let preserved = fixture.run_xor(&["-z", &path_a, &path_b]).await;
    assert!(preserved.status.success());
    assert!(preserved.stdout_raw == expected);

    let stripped = fixture.run_xor(&[&path_a, &path_b]).await;
    assert!(stripped.status.success());
    assert!(stripped.stdout_raw == strip_trailing_zeros(expected));
});

// Test a downstream reader closing the pipe ends the run with exit 0
#[cfg(unix)]
add_test!(closed_downstream_pipe_exits_zero, async {
    use std::process::Stdio;

    use crate::common::xor_binary;

    // Large enough that the writes must outlive the pipe buffer.
    let a = generate_random_data(4 * MB);
    let b = generate_random_data_with_seed(4 * MB, 2024);
    let fixture = Fixture::with_files(&["a.bin", "b.bin"], &[&a, &b]);

    let mut child = tokio::process::Command::new(xor_binary())
        .args([&fixture.path("a.bin"), &fixture.path("b.bin")])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .unwrap();

    // Close the reading end without consuming any output.
    drop(child.stdout.take());

    let output = child.wait_with_output().await.unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
});

// Test SIGINT maps to exit code 130 after cleanup
#[cfg(unix)]
add_test!(sigint_exits_with_130, async {
    use std::process::Stdio;
    use std::time::Duration;

    use crate::common::xor_binary;

    // Many chunks, so cancellation is observed between iterations.
    let data = generate_random_data(2 * MB);
    let fixture = Fixture::with_file("big.bin", &data);

    let mut child = tokio::process::Command::new(xor_binary())
        .args([&fixture.path("big.bin"), "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .unwrap();

    // Let the run block on the open stdin source, then interrupt it.
    tokio::time::sleep(Duration::from_millis(200)).await;
    let pid = child.id().unwrap().to_string();
    let kill_status = tokio::process::Command::new("kill")
        .args(["-INT", &pid])
        .status()
        .await
        .unwrap();
    assert!(kill_status.success());

    // EOF on stdin lets the in-flight read finish; the next iteration
    // observes the recorded signal.
    tokio::time::sleep(Duration::from_millis(100)).await;
    drop(child.stdin.take());

    let output = child.wait_with_output().await.unwrap();
    assert_eq!(output.status.code(), Some(130));
    assert!(String::from_utf8_lossy(&output.stderr).contains("interrupted"));
});
