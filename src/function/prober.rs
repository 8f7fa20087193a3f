// prober.rs
use super::{Config, ProbeError};
use super::outcome::{ProbeOutcome, ProbeReport, ProbeVerdict, SendPayload, SendReply};
use reqwest::{Client, StatusCode};
use std::fs;
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};
use chrono::Local;

// 内置候选路径列表 (按优先级排序, 先命中先赢)
pub const DEFAULT_CANDIDATES: [&str; 10] = [
    "/send",
    "/api/send",
    "/api/v1/send",
    "/api/send-message",
    "/send-message",
    "/api/message/text",
    "/api/v1/message/text",
    "/api/message/send",
    "/message/send",
    "/chat/send",
];

pub async fn run_probe(config: Config) -> Result<ProbeReport, ProbeError> {
    // 验证配置
    config.validate()?;

    println!("正在初始化探测...");

    // 初始化客户端
    let client = build_client(&config)?;

    // 加载候选路径
    let paths = load_candidates(&config)?;
    println!("已加载 {} 个候选路径", paths.len());

    // 执行顺序探测
    let report = probe_scan(client, &config, paths).await?;

    // 打印摘要
    print_summary(&report);

    Ok(report)
}

fn build_client(config: &Config) -> Result<Client, ProbeError> {
    let mut client_builder = Client::builder()
        .timeout(std::time::Duration::from_secs(config.timeout));

    // 配置代理
    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| ProbeError::InvalidConfig(format!("代理配置错误: {}", e)))?;
        client_builder = client_builder.proxy(proxy);
    }

    // 创建客户端
    let client = client_builder.build()
        .map_err(|e| ProbeError::ClientError(format!("创建HTTP客户端失败: {}", e)))?;

    Ok(client)
}

fn load_candidates(config: &Config) -> Result<Vec<String>, ProbeError> {
    // 指定字典则从文件加载, 否则使用内置列表
    let paths = match &config.dictionary {
        Some(dict) => fs::read_to_string(dict)
            .map_err(|e| ProbeError::IOError(format!("无法读取字典文件: {}", e)))?
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|path| !path.is_empty())
            .collect::<Vec<_>>(),
        None => DEFAULT_CANDIDATES.iter().map(|path| path.to_string()).collect(),
    };

    // 确保路径列表不为空
    if paths.is_empty() {
        return Err(ProbeError::InvalidConfig("候选路径列表为空".into()));
    }

    Ok(paths)
}

/// 按状态码分类单次探测结果
pub fn classify(status: StatusCode) -> ProbeOutcome {
    match status.as_u16() {
        404 => ProbeOutcome::NotFound,
        code @ 200..=299 => ProbeOutcome::Success(code),
        code => ProbeOutcome::SuspectedMatch(code),
    }
}

fn join_url(target: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", target.trim_end_matches('/'), path)
    } else {
        format!("{}/{}", target.trim_end_matches('/'), path)
    }
}

/// 解析命中后的服务器应答, 格式不对返回命名错误而不是崩溃
pub fn parse_reply(body: &str) -> Result<SendReply, ProbeError> {
    let reply = serde_json::from_str::<SendReply>(body)?;
    Ok(reply)
}

async fn probe_scan(
    client: Client,
    config: &Config,
    paths: Vec<String>,
) -> Result<ProbeReport, ProbeError> {
    // 创建进度条
    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
        .unwrap()
        .progress_chars("##-"));

    let payload = SendPayload {
        phone: config.phone.clone(),
        message: config.message.clone(),
    };

    // 记录整个探测的开始时间
    let overall_start = Instant::now();
    let paths_total = paths.len();
    let mut attempted = 0usize;
    let mut verdict = None;

    // 严格按顺序逐个探测, 不重试不并发, 每个候选只试一次
    for path in &paths {
        pb.set_message(format!("探测: {}", path));

        let url = join_url(&config.target, path);
        let start_time = Instant::now();
        attempted += 1;

        match client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status();
                let response_time = start_time.elapsed().as_millis() as u64;

                match classify(status) {
                    ProbeOutcome::NotFound => {
                        // 404: 路径不存在, 继续下一个
                        pb.println(format!("[未找到] {} ({}ms)", path, response_time));
                    }
                    ProbeOutcome::SuspectedMatch(code) => {
                        // 非404错误: 路径大概率存在, 只是请求体被拒, 终止探测
                        pb.println(format!("[可疑] {} | 状态: {}", path, code));
                        verdict = Some(ProbeVerdict::Suspected {
                            url: url.clone(),
                            status: code,
                        });
                    }
                    ProbeOutcome::Success(code) => {
                        // 2xx: 命中, 终止探测
                        let body = response.text().await.unwrap_or_default();
                        pb.println(format!("[命中] {} | 状态: {}", path, code));
                        verdict = Some(ProbeVerdict::Found {
                            url: url.clone(),
                            status: code,
                            body,
                        });
                    }
                }
            }
            Err(e) => {
                // 传输层失败: 仅记录该候选, 继续扫描
                pb.println(format!("请求失败: {} - {}", url, ProbeError::from(e)));
            }
        }

        pb.inc(1);

        if verdict.is_some() {
            break;
        }
    }

    pb.finish_with_message("探测结束");

    // 列表耗尽且无命中: 显式给出未发现结论
    let verdict = verdict.unwrap_or(ProbeVerdict::Exhausted { attempted });

    Ok(ProbeReport {
        target: config.target.clone(),
        verdict,
        attempted,
        paths_total,
        probe_duration: overall_start.elapsed().as_secs(),
        probe_timestamp: Local::now().to_string(),
    })
}

fn print_summary(report: &ProbeReport) {
    println!("\n=== 探测摘要 ===");
    println!("探测目标: {}", report.target);
    println!("探测路径数: {}/{}", report.attempted, report.paths_total);
    println!("探测耗时: {}秒", report.probe_duration);
    println!("探测时间戳: {}", report.probe_timestamp);

    match &report.verdict {
        ProbeVerdict::Found { url, status, body } => {
            println!("\n结论: 命中");
            println!("  - URL: {}", url);
            println!("  - 状态码: {}", status);
            println!("  - 应答原文: {}", body);
            // 应答若是JSON则顺带展示关键字段
            match parse_reply(body) {
                Ok(reply) => {
                    if let Some(status) = reply.status {
                        println!("  - 应答status字段: {}", status);
                    }
                    if let Some(message) = reply.message {
                        println!("  - 应答message字段: {}", message);
                    }
                }
                Err(e) => println!("  - 应答解析失败: {}", e),
            }
        }
        ProbeVerdict::Suspected { url, status } => {
            println!("\n结论: 可疑命中 (路径存在但请求体被拒)");
            println!("  - 状态码: {}", status);
            println!("  - 建议尝试URL: {}", url);
        }
        ProbeVerdict::Exhausted { attempted } => {
            println!("\n结论: 未发现可用端点 (共尝试 {} 个候选)", attempted);
        }
    }
}
