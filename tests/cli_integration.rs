use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;

const LONG_TEXT: &str = "Искусственный интеллект (ИИ) - это область компьютерных наук, которая занимается созданием
интеллектуальных машин, способных выполнять задачи, обычно требующие человеческого интеллекта.
Эти задачи включают распознавание речи, принятие решений, визуальное восприятие и перевод языков.

Машинное обучение - это подраздел искусственного интеллекта, который использует алгоритмы
для анализа данных, изучения закономерностей и принятия решений с минимальным вмешательством человека.
Глубокое обучение - это тип машинного обучения, который использует нейронные сети с множеством слоев.

Применение ИИ широко распространено в различных областях: медицина, финансы, транспорт, образование.
Например, в медицине ИИ помогает в диагностике заболеваний, а в финансах - в обнаружении мошенничества.
";

fn textsum() -> Command {
    let mut cmd = Command::cargo_bin("textsum").unwrap();
    cmd.env_remove("SUMMARY_METHOD")
        .env_remove("SUMMARY_RATIO")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn summarize_writes_summary_and_stats_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("article.txt");
    fs::write(&input, LONG_TEXT).unwrap();

    let out = textsum()
        .args(["summarize", "-i"])
        .arg(&input)
        .args(["-m", "frequency", "-r", "0.3", "--stats"])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Original: 6 sentences"));
    assert!(stdout.contains("Summary: 1 sentences"));

    let summary = fs::read_to_string(dir.path().join("article_summary.txt")).unwrap();
    assert!(!summary.is_empty());
    assert!(summary.len() < LONG_TEXT.len());

    let stats: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("article_stats.json")).unwrap())
            .unwrap();
    assert_eq!(stats["method_used"], "frequency");
    assert_eq!(stats["original_sentences_count"], 6);
    assert_eq!(stats["summary_sentences_count"], 1);
    assert!(stats["compression_ratio"].as_f64().unwrap() > 0.0);
    assert!(stats["summary_readability"]["total_words"].as_u64().unwrap() > 0);
}

#[test]
fn output_dir_receives_run_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.txt");
    fs::write(&input, "Это первое предложение. Это второе предложение. А это третье.").unwrap();
    let out_dir = dir.path().join("out");

    textsum()
        .args(["summarize", "-i"])
        .arg(&input)
        .args(["-r", "0.5", "-d"])
        .arg(&out_dir)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(out_dir.join("short_summary.txt")).unwrap(),
        "А это третье"
    );
    let run_dir = out_dir.join("short");
    assert_eq!(fs::read_to_string(run_dir.join("summary.txt")).unwrap(), "А это третье");
    let sentences: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(run_dir.join("sentences_info.json")).unwrap())
            .unwrap();
    assert_eq!(sentences.as_array().unwrap().len(), 1);
    assert_eq!(sentences[0]["position"], 2);
    assert!(run_dir.join("statistics.json").exists());
}

#[test]
fn visualize_renders_three_charts() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("article.txt");
    fs::write(&input, LONG_TEXT).unwrap();
    let out_dir = dir.path().join("out");

    textsum()
        .args(["summarize", "-i"])
        .arg(&input)
        .args(["-m", "frequency", "-v", "-d"])
        .arg(&out_dir)
        .assert()
        .success();

    let charts = out_dir.join("visualizations");
    for name in ["sentence_scores.png", "summary_comparison.png", "readability_metrics.png"] {
        let bytes = fs::read(charts.join(name)).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"), "{name} is not a png");
    }
}

#[test]
fn visualize_skips_charts_for_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("blank.txt");
    fs::write(&input, "   \n").unwrap();

    textsum()
        .args(["summarize", "-i"])
        .arg(&input)
        .arg("--visualize")
        .assert()
        .success();
    assert!(!dir.path().join("visualizations").exists());
}

#[test]
fn explicit_output_path_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("nested").join("result.txt");
    fs::write(&input, "Одно предложение.").unwrap();

    textsum()
        .args(["summarize", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "Одно предложение");
}

#[test]
fn invalid_ratio_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "Текст.").unwrap();

    textsum()
        .args(["summarize", "-i"])
        .arg(&input)
        .args(["-r", "1.5"])
        .assert()
        .failure();
    assert!(!dir.path().join("in_summary.txt").exists());
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    textsum()
        .args(["summarize", "-i"])
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure();
}

#[test]
fn custom_keywords_file_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let keywords = dir.path().join("keywords.txt");
    fs::write(&input, "Первое предложение тут. Второе про рыбу. Третье просто так.").unwrap();
    fs::write(&keywords, "# topic words\nрыб\n").unwrap();

    textsum()
        .args(["summarize", "-i"])
        .arg(&input)
        .arg("--keywords-file")
        .arg(&keywords)
        .assert()
        .success();
    assert!(dir.path().join("in_summary.txt").exists());
}

#[test]
fn analyze_prints_metrics() {
    let out = textsum()
        .args(["analyze", "--text", "The cat sat. The cat ran."])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Sentences: 2"));
    assert!(stdout.contains("Words: 6"));
    assert!(stdout.contains("Unique words: 4"));
    assert!(stdout.contains("Lexical diversity: 0.667"));
}

#[test]
fn analyze_requires_a_source() {
    textsum().arg("analyze").assert().failure();
}

#[test]
fn version_prints_crate_version() {
    let out = textsum().arg("version").output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        format!("textsum v{}", env!("CARGO_PKG_VERSION"))
    );
}
