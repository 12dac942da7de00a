//! The built-in rounds. Kept apart from the lookup code so question
//! edits never touch the repository logic.

use quizbowl_protocol::{AnswerLetter, Question, Round};

use quizbowl_protocol::AnswerLetter::{A, B, C, D};

/// All built-in rounds, in difficulty order.
pub fn builtin_rounds() -> Vec<Round> {
    vec![easy_round(), average_round(), difficult_round()]
}

fn round(
    id: &str,
    title: &str,
    points: u32,
    time_limit_seconds: u32,
    items: &[(&str, [&str; 4], AnswerLetter)],
) -> Round {
    let questions = items
        .iter()
        .enumerate()
        .map(|(i, (prompt, options, answer))| Question {
            id: format!("{id}-{}", i + 1),
            prompt: (*prompt).to_string(),
            options: options.iter().map(|o| (*o).to_string()).collect(),
            answer: *answer,
        })
        .collect();

    Round {
        id: id.to_string(),
        title: title.to_string(),
        points,
        time_limit_seconds,
        questions,
    }
}

pub fn easy_round() -> Round {
    round(
        "easy",
        "🟢 EASY",
        1,
        15,
        &[
            (
                "What does CPU stand for?",
                [
                    "Central Processing Unit",
                    "Computer Personal Unit",
                    "Central Program Utility",
                    "Core Processing User",
                ],
                A,
            ),
            (
                "Which of the following is an input device?",
                ["Monitor", "Printer", "Keyboard", "Speaker"],
                C,
            ),
            (
                "Which of these is an operating system?",
                ["Linux", "Python", "Chrome", "Excel"],
                A,
            ),
            (
                "What does RAM stand for?",
                [
                    "Read Access Memory",
                    "Random Access Memory",
                    "Rapid Action Module",
                    "Run Anywhere Machine",
                ],
                B,
            ),
            (
                "Which unit is the smallest?",
                ["Byte", "Kilobyte", "Bit", "Megabyte"],
                C,
            ),
            (
                "Which key combination usually copies selected text?",
                ["Ctrl + V", "Ctrl + X", "Ctrl + Z", "Ctrl + C"],
                D,
            ),
            (
                "What is the main page of a website commonly called?",
                ["Home page", "Cover page", "Title page", "Base page"],
                A,
            ),
            (
                "Which device is used to point and click on screen items?",
                ["Scanner", "Mouse", "Webcam", "Microphone"],
                B,
            ),
            (
                "What does WWW stand for?",
                [
                    "World Wide Web",
                    "Wide World Wires",
                    "Web Words Worldwide",
                    "Wireless Web Window",
                ],
                A,
            ),
            (
                "Which of these stores data permanently, even without power?",
                ["RAM", "CPU cache", "Hard disk", "Registers"],
                C,
            ),
        ],
    )
}

pub fn average_round() -> Round {
    round(
        "average",
        "🟡 AVERAGE",
        2,
        20,
        &[
            (
                "How many bits are in a byte?",
                ["4", "8", "16", "32"],
                B,
            ),
            (
                "Which protocol is used to load web pages securely?",
                ["FTP", "SMTP", "HTTPS", "SSH"],
                C,
            ),
            (
                "What is the binary representation of the decimal number 5?",
                ["101", "110", "111", "100"],
                A,
            ),
            (
                "Which language is primarily used to style web pages?",
                ["HTML", "CSS", "SQL", "C"],
                B,
            ),
            (
                "What does URL stand for?",
                [
                    "Universal Routing Link",
                    "Uniform Resource Locator",
                    "Unified Remote Line",
                    "User Request Label",
                ],
                B,
            ),
            (
                "Which data structure works on a first-in, first-out basis?",
                ["Stack", "Tree", "Queue", "Graph"],
                C,
            ),
            (
                "What does GPU stand for?",
                [
                    "General Processing Unit",
                    "Graphics Program Utility",
                    "Global Power Unit",
                    "Graphics Processing Unit",
                ],
                D,
            ),
            (
                "Which number system uses the digits 0-9 and A-F?",
                ["Binary", "Octal", "Hexadecimal", "Decimal"],
                C,
            ),
            (
                "Which company developed the Java programming language?",
                ["Sun Microsystems", "Microsoft", "Apple", "IBM"],
                A,
            ),
            (
                "What type of software protects a computer from malware?",
                ["Compiler", "Antivirus", "Spreadsheet", "Driver"],
                B,
            ),
        ],
    )
}

pub fn difficult_round() -> Round {
    round(
        "difficult",
        "🔴 DIFFICULT",
        3,
        30,
        &[
            (
                "What is the time complexity of binary search on a sorted array?",
                ["O(n)", "O(log n)", "O(n log n)", "O(1)"],
                B,
            ),
            (
                "Which layer of the OSI model handles routing between networks?",
                ["Transport", "Data link", "Network", "Session"],
                C,
            ),
            (
                "What is the default port for HTTP?",
                ["21", "25", "443", "80"],
                D,
            ),
            (
                "Which sorting algorithm has a worst case of O(n^2) but averages O(n log n)?",
                ["Quicksort", "Merge sort", "Heap sort", "Counting sort"],
                A,
            ),
            (
                "What does ACID stand for in databases?",
                [
                    "Access, Control, Index, Data",
                    "Atomicity, Consistency, Isolation, Durability",
                    "Accuracy, Concurrency, Integrity, Distribution",
                    "Allocation, Caching, Indexing, Deletion",
                ],
                B,
            ),
            (
                "Which of these is NOT a valid IPv4 address?",
                ["192.168.0.1", "10.0.0.255", "256.1.1.1", "172.16.5.4"],
                C,
            ),
            (
                "What is the two's complement 8-bit representation of -1?",
                ["10000001", "00000001", "01111111", "11111111"],
                D,
            ),
            (
                "Which scheduling algorithm can cause starvation of long jobs?",
                [
                    "Shortest job first",
                    "Round robin",
                    "First come, first served",
                    "Fixed time slicing",
                ],
                A,
            ),
            (
                "In public-key cryptography, what is used to verify a digital signature?",
                [
                    "The signer's private key",
                    "The signer's public key",
                    "A shared session key",
                    "The verifier's private key",
                ],
                B,
            ),
            (
                "Which data structure is typically used to implement a priority queue?",
                ["Linked list", "Hash table", "Binary heap", "Trie"],
                C,
            ),
        ],
    )
}
